// ── Status keys ──

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of a read-only appliance status value (`*.Status.*`).
///
/// Unrecognised strings resolve to [`StatusKey::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum StatusKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "BSH.Common.Status.BatteryChargingState")]
    BshCommonBatteryChargingState,
    #[strum(serialize = "BSH.Common.Status.BatteryLevel")]
    BshCommonBatteryLevel,
    #[strum(serialize = "BSH.Common.Status.ChargingConnection")]
    BshCommonChargingConnection,
    #[strum(serialize = "BSH.Common.Status.DoorState")]
    BshCommonDoorState,
    #[strum(serialize = "BSH.Common.Status.LocalControlActive")]
    BshCommonLocalControlActive,
    #[strum(serialize = "BSH.Common.Status.OperationState")]
    BshCommonOperationState,
    #[strum(serialize = "BSH.Common.Status.RemoteControlActive")]
    BshCommonRemoteControlActive,
    #[strum(serialize = "BSH.Common.Status.RemoteControlStartAllowed")]
    BshCommonRemoteControlStartAllowed,
    #[strum(serialize = "BSH.Common.Status.Video.CameraState")]
    BshCommonVideoCameraState,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.DustBoxInserted")]
    ConsumerProductsCleaningRobotDustBoxInserted,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.LastSelectedMap")]
    ConsumerProductsCleaningRobotLastSelectedMap,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.Lifted")]
    ConsumerProductsCleaningRobotLifted,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.Lost")]
    ConsumerProductsCleaningRobotLost,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterCoffee")]
    ConsumerProductsCoffeeMakerBeverageCounterCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterCoffeeAndMilk")]
    ConsumerProductsCoffeeMakerBeverageCounterCoffeeAndMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterFrothyMilk")]
    ConsumerProductsCoffeeMakerBeverageCounterFrothyMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotMilk")]
    ConsumerProductsCoffeeMakerBeverageCounterHotMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotWater")]
    ConsumerProductsCoffeeMakerBeverageCounterHotWater,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotWaterCups")]
    ConsumerProductsCoffeeMakerBeverageCounterHotWaterCups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterMilk")]
    ConsumerProductsCoffeeMakerBeverageCounterMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterPowderCoffee")]
    ConsumerProductsCoffeeMakerBeverageCounterPowderCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterRistrettoEspresso")]
    ConsumerProductsCoffeeMakerBeverageCounterRistrettoEspresso,
    #[strum(serialize = "Cooking.Oven.Status.CurrentCavityTemperature")]
    CookingOvenCurrentCavityTemperature,
    #[strum(serialize = "Refrigeration.Common.Status.Door.BottleCooler")]
    RefrigerationCommonDoorBottleCooler,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Chiller")]
    RefrigerationCommonDoorChiller,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerCommon")]
    RefrigerationCommonDoorChillerCommon,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerLeft")]
    RefrigerationCommonDoorChillerLeft,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerRight")]
    RefrigerationCommonDoorChillerRight,
    #[strum(serialize = "Refrigeration.Common.Status.Door.FlexCompartment")]
    RefrigerationCommonDoorFlexCompartment,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Freezer")]
    RefrigerationCommonDoorFreezer,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator")]
    RefrigerationCommonDoorRefrigerator,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator2")]
    RefrigerationCommonDoorRefrigerator2,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator3")]
    RefrigerationCommonDoorRefrigerator3,
    #[strum(serialize = "Refrigeration.Common.Status.Door.WineCompartment")]
    RefrigerationCommonDoorWineCompartment,
}

open_key!(StatusKey);
