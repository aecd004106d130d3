// ── Program option keys ──

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of a program option (`*.Option.*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum OptionKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "BSH.Common.Option.Duration")]
    BshCommonDuration,
    #[strum(serialize = "BSH.Common.Option.ElapsedProgramTime")]
    BshCommonElapsedProgramTime,
    #[strum(serialize = "BSH.Common.Option.EstimatedTotalProgramTime")]
    BshCommonEstimatedTotalProgramTime,
    #[strum(serialize = "BSH.Common.Option.FinishInRelative")]
    BshCommonFinishInRelative,
    #[strum(serialize = "BSH.Common.Option.ProgramProgress")]
    BshCommonProgramProgress,
    #[strum(serialize = "BSH.Common.Option.RemainingProgramTime")]
    BshCommonRemainingProgramTime,
    #[strum(serialize = "BSH.Common.Option.RemainingProgramTimeIsEstimated")]
    BshCommonRemainingProgramTimeIsEstimated,
    #[strum(serialize = "BSH.Common.Option.StartInRelative")]
    BshCommonStartInRelative,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.CleaningMode")]
    ConsumerProductsCleaningRobotCleaningMode,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.ProcessPhase")]
    ConsumerProductsCleaningRobotProcessPhase,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.ReferenceMapId")]
    ConsumerProductsCleaningRobotReferenceMapId,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.BeanAmount")]
    ConsumerProductsCoffeeMakerBeanAmount,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.BeanContainerSelection")]
    ConsumerProductsCoffeeMakerBeanContainerSelection,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.CoffeeMilkRatio")]
    ConsumerProductsCoffeeMakerCoffeeMilkRatio,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.CoffeeTemperature")]
    ConsumerProductsCoffeeMakerCoffeeTemperature,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.FillQuantity")]
    ConsumerProductsCoffeeMakerFillQuantity,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.FlowRate")]
    ConsumerProductsCoffeeMakerFlowRate,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.HotWaterTemperature")]
    ConsumerProductsCoffeeMakerHotWaterTemperature,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.MultipleBeverages")]
    ConsumerProductsCoffeeMakerMultipleBeverages,
    #[strum(serialize = "Cooking.Common.Option.Hood.IntensiveLevel")]
    CookingCommonHoodIntensiveLevel,
    #[strum(serialize = "Cooking.Common.Option.Hood.VentingLevel")]
    CookingCommonHoodVentingLevel,
    #[strum(serialize = "Cooking.Oven.Option.FastPreHeat")]
    CookingOvenFastPreHeat,
    #[strum(serialize = "Cooking.Oven.Option.SetpointTemperature")]
    CookingOvenSetpointTemperature,
    #[strum(serialize = "Cooking.Oven.Option.WarmingLevel")]
    CookingOvenWarmingLevel,
    #[strum(serialize = "Dishcare.Dishwasher.Option.BrillianceDry")]
    DishcareDishwasherBrillianceDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.EcoDry")]
    DishcareDishwasherEcoDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.ExtraDry")]
    DishcareDishwasherExtraDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.HalfLoad")]
    DishcareDishwasherHalfLoad,
    #[strum(serialize = "Dishcare.Dishwasher.Option.HygienePlus")]
    DishcareDishwasherHygienePlus,
    #[strum(serialize = "Dishcare.Dishwasher.Option.IntensivZone")]
    DishcareDishwasherIntensivZone,
    #[strum(serialize = "Dishcare.Dishwasher.Option.SilenceOnDemand")]
    DishcareDishwasherSilenceOnDemand,
    #[strum(serialize = "Dishcare.Dishwasher.Option.VarioSpeedPlus")]
    DishcareDishwasherVarioSpeedPlus,
    #[strum(serialize = "Dishcare.Dishwasher.Option.ZeoliteDry")]
    DishcareDishwasherZeoliteDry,
    #[strum(serialize = "LaundryCare.Common.Option.VarioPerfect")]
    LaundryCareCommonVarioPerfect,
    #[strum(serialize = "LaundryCare.Dryer.Option.DryingTarget")]
    LaundryCareDryerDryingTarget,
    #[strum(serialize = "LaundryCare.Washer.Option.IDos1Active")]
    LaundryCareWasherIDos1Active,
    #[strum(serialize = "LaundryCare.Washer.Option.IDos2Active")]
    LaundryCareWasherIDos2Active,
    #[strum(serialize = "LaundryCare.Washer.Option.SpinSpeed")]
    LaundryCareWasherSpinSpeed,
    #[strum(serialize = "LaundryCare.Washer.Option.Temperature")]
    LaundryCareWasherTemperature,
}

open_key!(OptionKey);
