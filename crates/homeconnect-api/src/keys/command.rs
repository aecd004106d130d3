// ── Command keys ──

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of an executable appliance command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum CommandKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "BSH.Common.Command.AcknowledgeEvent")]
    BshCommonAcknowledgeEvent,
    #[strum(serialize = "BSH.Common.Command.OpenDoor")]
    BshCommonOpenDoor,
    #[strum(serialize = "BSH.Common.Command.PartlyOpenDoor")]
    BshCommonPartlyOpenDoor,
    #[strum(serialize = "BSH.Common.Command.PauseProgram")]
    BshCommonPauseProgram,
    #[strum(serialize = "BSH.Common.Command.ResumeProgram")]
    BshCommonResumeProgram,
}

open_key!(CommandKey);
