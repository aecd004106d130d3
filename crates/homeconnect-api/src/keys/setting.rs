// ── Setting keys ──

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of a writable appliance setting (`*.Setting.*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum SettingKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "BSH.Common.Setting.AlarmClock")]
    BshCommonAlarmClock,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightBrightness")]
    BshCommonAmbientLightBrightness,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightColor")]
    BshCommonAmbientLightColor,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightCustomColor")]
    BshCommonAmbientLightCustomColor,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightEnabled")]
    BshCommonAmbientLightEnabled,
    #[strum(serialize = "BSH.Common.Setting.ChildLock")]
    BshCommonChildLock,
    #[strum(serialize = "BSH.Common.Setting.LiquidVolumeUnit")]
    BshCommonLiquidVolumeUnit,
    #[strum(serialize = "BSH.Common.Setting.PowerState")]
    BshCommonPowerState,
    #[strum(serialize = "BSH.Common.Setting.TemperatureUnit")]
    BshCommonTemperatureUnit,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.CurrentMap")]
    ConsumerProductsCleaningRobotCurrentMap,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap1")]
    ConsumerProductsCleaningRobotNameOfMap1,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap2")]
    ConsumerProductsCleaningRobotNameOfMap2,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap3")]
    ConsumerProductsCleaningRobotNameOfMap3,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap4")]
    ConsumerProductsCleaningRobotNameOfMap4,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap5")]
    ConsumerProductsCleaningRobotNameOfMap5,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Setting.CupWarmer")]
    ConsumerProductsCoffeeMakerCupWarmer,
    #[strum(serialize = "Cooking.Common.Setting.Lighting")]
    CookingCommonLighting,
    #[strum(serialize = "Cooking.Common.Setting.LightingBrightness")]
    CookingCommonLightingBrightness,
    #[strum(serialize = "Cooking.Hood.Setting.ColorTemperature")]
    CookingHoodColorTemperature,
    #[strum(serialize = "Cooking.Hood.Setting.ColorTemperaturePercent")]
    CookingHoodColorTemperaturePercent,
    #[strum(serialize = "Cooking.Oven.Setting.SabbathMode")]
    CookingOvenSabbathMode,
    #[strum(serialize = "LaundryCare.Washer.Setting.IDos1BaseLevel")]
    LaundryCareWasherIDos1BaseLevel,
    #[strum(serialize = "LaundryCare.Washer.Setting.IDos2BaseLevel")]
    LaundryCareWasherIDos2BaseLevel,
    #[strum(serialize = "Refrigeration.Common.Setting.BottleCooler.SetpointTemperature")]
    RefrigerationCommonBottleCoolerSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerCommon.SetpointTemperature")]
    RefrigerationCommonChillerCommonSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerLeft.SetpointTemperature")]
    RefrigerationCommonChillerLeftSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerRight.SetpointTemperature")]
    RefrigerationCommonChillerRightSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.Dispenser.Enabled")]
    RefrigerationCommonDispenserEnabled,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantForceFreezer")]
    RefrigerationCommonDoorAssistantForceFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantForceFridge")]
    RefrigerationCommonDoorAssistantForceFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantFreezer")]
    RefrigerationCommonDoorAssistantFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantFridge")]
    RefrigerationCommonDoorAssistantFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTimeoutFreezer")]
    RefrigerationCommonDoorAssistantTimeoutFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTimeoutFridge")]
    RefrigerationCommonDoorAssistantTimeoutFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTriggerFreezer")]
    RefrigerationCommonDoorAssistantTriggerFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTriggerFridge")]
    RefrigerationCommonDoorAssistantTriggerFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.EcoMode")]
    RefrigerationCommonEcoMode,
    #[strum(serialize = "Refrigeration.Common.Setting.FreshMode")]
    RefrigerationCommonFreshMode,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.External.Brightness")]
    RefrigerationCommonLightExternalBrightness,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.External.Power")]
    RefrigerationCommonLightExternalPower,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.Internal.Brightness")]
    RefrigerationCommonLightInternalBrightness,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.Internal.Power")]
    RefrigerationCommonLightInternalPower,
    #[strum(serialize = "Refrigeration.Common.Setting.SabbathMode")]
    RefrigerationCommonSabbathMode,
    #[strum(serialize = "Refrigeration.Common.Setting.VacationMode")]
    RefrigerationCommonVacationMode,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment2.SetpointTemperature")]
    RefrigerationCommonWineCompartment2SetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment3.SetpointTemperature")]
    RefrigerationCommonWineCompartment3SetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment.SetpointTemperature")]
    RefrigerationCommonWineCompartmentSetpointTemperature,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SetpointTemperatureFreezer")]
    RefrigerationFridgeFreezerSetpointTemperatureFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SetpointTemperatureRefrigerator")]
    RefrigerationFridgeFreezerSetpointTemperatureRefrigerator,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SuperModeFreezer")]
    RefrigerationFridgeFreezerSuperModeFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SuperModeRefrigerator")]
    RefrigerationFridgeFreezerSuperModeRefrigerator,
}

open_key!(SettingKey);
