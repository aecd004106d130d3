// ── Event keys ──
//
// Superset of every key that can appear in a stream frame: discrete
// appliance events plus the status, setting and option keys whose changes
// are reported as events.

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Key of a single [`Event`](crate::Event) item.
///
/// Carries the full vendor identifier, e.g. `BSH.Common.Status.DoorState`.
/// Keys the crate does not know about resolve to [`EventKey::Unknown`], so new
/// vendor keys never break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum EventKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "BSH.Common.Appliance.Connected")]
    BshCommonApplianceConnected,
    #[strum(serialize = "BSH.Common.Appliance.Depaired")]
    BshCommonApplianceDepaired,
    #[strum(serialize = "BSH.Common.Appliance.Disconnected")]
    BshCommonApplianceDisconnected,
    #[strum(serialize = "BSH.Common.Appliance.Paired")]
    BshCommonAppliancePaired,
    #[strum(serialize = "BSH.Common.Event.AlarmClockElapsed")]
    BshCommonEventAlarmClockElapsed,
    #[strum(serialize = "BSH.Common.Event.ProgramAborted")]
    BshCommonEventProgramAborted,
    #[strum(serialize = "BSH.Common.Event.ProgramFinished")]
    BshCommonEventProgramFinished,
    #[strum(serialize = "BSH.Common.Option.Duration")]
    BshCommonOptionDuration,
    #[strum(serialize = "BSH.Common.Option.ElapsedProgramTime")]
    BshCommonOptionElapsedProgramTime,
    #[strum(serialize = "BSH.Common.Option.EstimatedTotalProgramTime")]
    BshCommonOptionEstimatedTotalProgramTime,
    #[strum(serialize = "BSH.Common.Option.FinishInRelative")]
    BshCommonOptionFinishInRelative,
    #[strum(serialize = "BSH.Common.Option.ProgramProgress")]
    BshCommonOptionProgramProgress,
    #[strum(serialize = "BSH.Common.Option.RemainingProgramTime")]
    BshCommonOptionRemainingProgramTime,
    #[strum(serialize = "BSH.Common.Option.RemainingProgramTimeIsEstimated")]
    BshCommonOptionRemainingProgramTimeIsEstimated,
    #[strum(serialize = "BSH.Common.Option.StartInRelative")]
    BshCommonOptionStartInRelative,
    #[strum(serialize = "BSH.Common.Root.ActiveProgram")]
    BshCommonRootActiveProgram,
    #[strum(serialize = "BSH.Common.Root.SelectedProgram")]
    BshCommonRootSelectedProgram,
    #[strum(serialize = "BSH.Common.Setting.AlarmClock")]
    BshCommonSettingAlarmClock,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightBrightness")]
    BshCommonSettingAmbientLightBrightness,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightColor")]
    BshCommonSettingAmbientLightColor,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightCustomColor")]
    BshCommonSettingAmbientLightCustomColor,
    #[strum(serialize = "BSH.Common.Setting.AmbientLightEnabled")]
    BshCommonSettingAmbientLightEnabled,
    #[strum(serialize = "BSH.Common.Setting.ChildLock")]
    BshCommonSettingChildLock,
    #[strum(serialize = "BSH.Common.Setting.LiquidVolumeUnit")]
    BshCommonSettingLiquidVolumeUnit,
    #[strum(serialize = "BSH.Common.Setting.PowerState")]
    BshCommonSettingPowerState,
    #[strum(serialize = "BSH.Common.Setting.TemperatureUnit")]
    BshCommonSettingTemperatureUnit,
    #[strum(serialize = "BSH.Common.Status.BatteryChargingState")]
    BshCommonStatusBatteryChargingState,
    #[strum(serialize = "BSH.Common.Status.BatteryLevel")]
    BshCommonStatusBatteryLevel,
    #[strum(serialize = "BSH.Common.Status.ChargingConnection")]
    BshCommonStatusChargingConnection,
    #[strum(serialize = "BSH.Common.Status.DoorState")]
    BshCommonStatusDoorState,
    #[strum(serialize = "BSH.Common.Status.LocalControlActive")]
    BshCommonStatusLocalControlActive,
    #[strum(serialize = "BSH.Common.Status.OperationState")]
    BshCommonStatusOperationState,
    #[strum(serialize = "BSH.Common.Status.RemoteControlActive")]
    BshCommonStatusRemoteControlActive,
    #[strum(serialize = "BSH.Common.Status.RemoteControlStartAllowed")]
    BshCommonStatusRemoteControlStartAllowed,
    #[strum(serialize = "BSH.Common.Status.Video.CameraState")]
    BshCommonStatusVideoCameraState,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Event.DockingStationNotFound")]
    ConsumerProductsCleaningRobotEventDockingStationNotFound,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Event.EmptyDustBoxAndCleanFilter")]
    ConsumerProductsCleaningRobotEventEmptyDustBoxAndCleanFilter,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Event.RobotIsStuck")]
    ConsumerProductsCleaningRobotEventRobotIsStuck,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.CleaningMode")]
    ConsumerProductsCleaningRobotOptionCleaningMode,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.ProcessPhase")]
    ConsumerProductsCleaningRobotOptionProcessPhase,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Option.ReferenceMapId")]
    ConsumerProductsCleaningRobotOptionReferenceMapId,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.CurrentMap")]
    ConsumerProductsCleaningRobotSettingCurrentMap,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap1")]
    ConsumerProductsCleaningRobotSettingNameOfMap1,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap2")]
    ConsumerProductsCleaningRobotSettingNameOfMap2,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap3")]
    ConsumerProductsCleaningRobotSettingNameOfMap3,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap4")]
    ConsumerProductsCleaningRobotSettingNameOfMap4,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Setting.NameOfMap5")]
    ConsumerProductsCleaningRobotSettingNameOfMap5,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.DustBoxInserted")]
    ConsumerProductsCleaningRobotStatusDustBoxInserted,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.LastSelectedMap")]
    ConsumerProductsCleaningRobotStatusLastSelectedMap,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.Lifted")]
    ConsumerProductsCleaningRobotStatusLifted,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Status.Lost")]
    ConsumerProductsCleaningRobotStatusLost,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.BeanContainerEmpty")]
    ConsumerProductsCoffeeMakerEventBeanContainerEmpty,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.CalcNCleanIn10Cups")]
    ConsumerProductsCoffeeMakerEventCalcNCleanIn10Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.CalcNCleanIn15Cups")]
    ConsumerProductsCoffeeMakerEventCalcNCleanIn15Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.CalcNCleanIn20Cups")]
    ConsumerProductsCoffeeMakerEventCalcNCleanIn20Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.CalcNCleanIn5Cup")]
    ConsumerProductsCoffeeMakerEventCalcNCleanIn5Cup,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DescalingIn10Cups")]
    ConsumerProductsCoffeeMakerEventDescalingIn10Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DescalingIn15Cups")]
    ConsumerProductsCoffeeMakerEventDescalingIn15Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DescalingIn20Cups")]
    ConsumerProductsCoffeeMakerEventDescalingIn20Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DescalingIn5Cups")]
    ConsumerProductsCoffeeMakerEventDescalingIn5Cups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceCalcNCleanBlockage")]
    ConsumerProductsCoffeeMakerEventDeviceCalcNCleanBlockage,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceCalcNCleanOverdue")]
    ConsumerProductsCoffeeMakerEventDeviceCalcNCleanOverdue,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceCleaningOverdue")]
    ConsumerProductsCoffeeMakerEventDeviceCleaningOverdue,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceDescalingBlockage")]
    ConsumerProductsCoffeeMakerEventDeviceDescalingBlockage,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceDescalingOverdue")]
    ConsumerProductsCoffeeMakerEventDeviceDescalingOverdue,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceShouldBeCalcNCleaned")]
    ConsumerProductsCoffeeMakerEventDeviceShouldBeCalcNCleaned,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceShouldBeCleaned")]
    ConsumerProductsCoffeeMakerEventDeviceShouldBeCleaned,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DeviceShouldBeDescaled")]
    ConsumerProductsCoffeeMakerEventDeviceShouldBeDescaled,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.DripTrayFull")]
    ConsumerProductsCoffeeMakerEventDripTrayFull,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.KeepMilkTankCool")]
    ConsumerProductsCoffeeMakerEventKeepMilkTankCool,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Event.WaterTankEmpty")]
    ConsumerProductsCoffeeMakerEventWaterTankEmpty,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.BeanAmount")]
    ConsumerProductsCoffeeMakerOptionBeanAmount,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.BeanContainerSelection")]
    ConsumerProductsCoffeeMakerOptionBeanContainerSelection,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.CoffeeMilkRatio")]
    ConsumerProductsCoffeeMakerOptionCoffeeMilkRatio,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.CoffeeTemperature")]
    ConsumerProductsCoffeeMakerOptionCoffeeTemperature,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.FillQuantity")]
    ConsumerProductsCoffeeMakerOptionFillQuantity,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.FlowRate")]
    ConsumerProductsCoffeeMakerOptionFlowRate,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.HotWaterTemperature")]
    ConsumerProductsCoffeeMakerOptionHotWaterTemperature,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Option.MultipleBeverages")]
    ConsumerProductsCoffeeMakerOptionMultipleBeverages,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Setting.CupWarmer")]
    ConsumerProductsCoffeeMakerSettingCupWarmer,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterCoffee")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterCoffeeAndMilk")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterCoffeeAndMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterFrothyMilk")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterFrothyMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotMilk")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterHotMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotWater")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterHotWater,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterHotWaterCups")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterHotWaterCups,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterMilk")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterPowderCoffee")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterPowderCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Status.BeverageCounterRistrettoEspresso")]
    ConsumerProductsCoffeeMakerStatusBeverageCounterRistrettoEspresso,
    #[strum(serialize = "Cooking.Common.Event.Hood.GreaseFilterMaxSaturationNearlyReached")]
    CookingCommonEventHoodGreaseFilterMaxSaturationNearlyReached,
    #[strum(serialize = "Cooking.Common.Event.Hood.GreaseFilterMaxSaturationReached")]
    CookingCommonEventHoodGreaseFilterMaxSaturationReached,
    #[strum(serialize = "Cooking.Common.Option.Hood.IntensiveLevel")]
    CookingCommonOptionHoodIntensiveLevel,
    #[strum(serialize = "Cooking.Common.Option.Hood.VentingLevel")]
    CookingCommonOptionHoodVentingLevel,
    #[strum(serialize = "Cooking.Common.Setting.Lighting")]
    CookingCommonSettingLighting,
    #[strum(serialize = "Cooking.Common.Setting.LightingBrightness")]
    CookingCommonSettingLightingBrightness,
    #[strum(serialize = "Cooking.Hood.Setting.ColorTemperature")]
    CookingHoodSettingColorTemperature,
    #[strum(serialize = "Cooking.Hood.Setting.ColorTemperaturePercent")]
    CookingHoodSettingColorTemperaturePercent,
    #[strum(serialize = "Cooking.Oven.Event.PreheatFinished")]
    CookingOvenEventPreheatFinished,
    #[strum(serialize = "Cooking.Oven.Event.RegularPreheatFinished")]
    CookingOvenEventRegularPreheatFinished,
    #[strum(serialize = "Cooking.Oven.Option.FastPreHeat")]
    CookingOvenOptionFastPreHeat,
    #[strum(serialize = "Cooking.Oven.Option.SetpointTemperature")]
    CookingOvenOptionSetpointTemperature,
    #[strum(serialize = "Cooking.Oven.Option.WarmingLevel")]
    CookingOvenOptionWarmingLevel,
    #[strum(serialize = "Cooking.Oven.Setting.SabbathMode")]
    CookingOvenSettingSabbathMode,
    #[strum(serialize = "Cooking.Oven.Status.CurrentCavityTemperature")]
    CookingOvenStatusCurrentCavityTemperature,
    #[strum(serialize = "Dishcare.Dishwasher.Event.RinseAidNearlyEmpty")]
    DishcareDishwasherEventRinseAidNearlyEmpty,
    #[strum(serialize = "Dishcare.Dishwasher.Event.SaltNearlyEmpty")]
    DishcareDishwasherEventSaltNearlyEmpty,
    #[strum(serialize = "Dishcare.Dishwasher.Option.BrillianceDry")]
    DishcareDishwasherOptionBrillianceDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.EcoDry")]
    DishcareDishwasherOptionEcoDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.ExtraDry")]
    DishcareDishwasherOptionExtraDry,
    #[strum(serialize = "Dishcare.Dishwasher.Option.HalfLoad")]
    DishcareDishwasherOptionHalfLoad,
    #[strum(serialize = "Dishcare.Dishwasher.Option.HygienePlus")]
    DishcareDishwasherOptionHygienePlus,
    #[strum(serialize = "Dishcare.Dishwasher.Option.IntensivZone")]
    DishcareDishwasherOptionIntensivZone,
    #[strum(serialize = "Dishcare.Dishwasher.Option.SilenceOnDemand")]
    DishcareDishwasherOptionSilenceOnDemand,
    #[strum(serialize = "Dishcare.Dishwasher.Option.VarioSpeedPlus")]
    DishcareDishwasherOptionVarioSpeedPlus,
    #[strum(serialize = "Dishcare.Dishwasher.Option.ZeoliteDry")]
    DishcareDishwasherOptionZeoliteDry,
    #[strum(serialize = "LaundryCare.Common.Option.VarioPerfect")]
    LaundryCareCommonOptionVarioPerfect,
    #[strum(serialize = "LaundryCare.Dryer.Event.DryingProcessFinished")]
    LaundryCareDryerEventDryingProcessFinished,
    #[strum(serialize = "LaundryCare.Dryer.Option.DryingTarget")]
    LaundryCareDryerOptionDryingTarget,
    #[strum(serialize = "LaundryCare.Washer.Event.IDos1FillLevelPoor")]
    LaundryCareWasherEventIDos1FillLevelPoor,
    #[strum(serialize = "LaundryCare.Washer.Event.IDos2FillLevelPoor")]
    LaundryCareWasherEventIDos2FillLevelPoor,
    #[strum(serialize = "LaundryCare.Washer.Option.IDos1Active")]
    LaundryCareWasherOptionIDos1Active,
    #[strum(serialize = "LaundryCare.Washer.Option.IDos2Active")]
    LaundryCareWasherOptionIDos2Active,
    #[strum(serialize = "LaundryCare.Washer.Option.SpinSpeed")]
    LaundryCareWasherOptionSpinSpeed,
    #[strum(serialize = "LaundryCare.Washer.Option.Temperature")]
    LaundryCareWasherOptionTemperature,
    #[strum(serialize = "LaundryCare.Washer.Setting.IDos1BaseLevel")]
    LaundryCareWasherSettingIDos1BaseLevel,
    #[strum(serialize = "LaundryCare.Washer.Setting.IDos2BaseLevel")]
    LaundryCareWasherSettingIDos2BaseLevel,
    #[strum(serialize = "Refrigeration.Common.Setting.BottleCooler.SetpointTemperature")]
    RefrigerationCommonSettingBottleCoolerSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerCommon.SetpointTemperature")]
    RefrigerationCommonSettingChillerCommonSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerLeft.SetpointTemperature")]
    RefrigerationCommonSettingChillerLeftSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.ChillerRight.SetpointTemperature")]
    RefrigerationCommonSettingChillerRightSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.Dispenser.Enabled")]
    RefrigerationCommonSettingDispenserEnabled,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantForceFreezer")]
    RefrigerationCommonSettingDoorAssistantForceFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantForceFridge")]
    RefrigerationCommonSettingDoorAssistantForceFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantFreezer")]
    RefrigerationCommonSettingDoorAssistantFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantFridge")]
    RefrigerationCommonSettingDoorAssistantFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTimeoutFreezer")]
    RefrigerationCommonSettingDoorAssistantTimeoutFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTimeoutFridge")]
    RefrigerationCommonSettingDoorAssistantTimeoutFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTriggerFreezer")]
    RefrigerationCommonSettingDoorAssistantTriggerFreezer,
    #[strum(serialize = "Refrigeration.Common.Setting.Door.AssistantTriggerFridge")]
    RefrigerationCommonSettingDoorAssistantTriggerFridge,
    #[strum(serialize = "Refrigeration.Common.Setting.EcoMode")]
    RefrigerationCommonSettingEcoMode,
    #[strum(serialize = "Refrigeration.Common.Setting.FreshMode")]
    RefrigerationCommonSettingFreshMode,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.External.Brightness")]
    RefrigerationCommonSettingLightExternalBrightness,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.External.Power")]
    RefrigerationCommonSettingLightExternalPower,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.Internal.Brightness")]
    RefrigerationCommonSettingLightInternalBrightness,
    #[strum(serialize = "Refrigeration.Common.Setting.Light.Internal.Power")]
    RefrigerationCommonSettingLightInternalPower,
    #[strum(serialize = "Refrigeration.Common.Setting.SabbathMode")]
    RefrigerationCommonSettingSabbathMode,
    #[strum(serialize = "Refrigeration.Common.Setting.VacationMode")]
    RefrigerationCommonSettingVacationMode,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment.SetpointTemperature")]
    RefrigerationCommonSettingWineCompartmentSetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment2.SetpointTemperature")]
    RefrigerationCommonSettingWineCompartment2SetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Setting.WineCompartment3.SetpointTemperature")]
    RefrigerationCommonSettingWineCompartment3SetpointTemperature,
    #[strum(serialize = "Refrigeration.Common.Status.Door.BottleCooler")]
    RefrigerationCommonStatusDoorBottleCooler,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Chiller")]
    RefrigerationCommonStatusDoorChiller,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerCommon")]
    RefrigerationCommonStatusDoorChillerCommon,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerLeft")]
    RefrigerationCommonStatusDoorChillerLeft,
    #[strum(serialize = "Refrigeration.Common.Status.Door.ChillerRight")]
    RefrigerationCommonStatusDoorChillerRight,
    #[strum(serialize = "Refrigeration.Common.Status.Door.FlexCompartment")]
    RefrigerationCommonStatusDoorFlexCompartment,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Freezer")]
    RefrigerationCommonStatusDoorFreezer,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator")]
    RefrigerationCommonStatusDoorRefrigerator,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator2")]
    RefrigerationCommonStatusDoorRefrigerator2,
    #[strum(serialize = "Refrigeration.Common.Status.Door.Refrigerator3")]
    RefrigerationCommonStatusDoorRefrigerator3,
    #[strum(serialize = "Refrigeration.Common.Status.Door.WineCompartment")]
    RefrigerationCommonStatusDoorWineCompartment,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Event.DoorAlarmFreezer")]
    RefrigerationFridgeFreezerEventDoorAlarmFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Event.DoorAlarmRefrigerator")]
    RefrigerationFridgeFreezerEventDoorAlarmRefrigerator,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Event.TemperatureAlarmFreezer")]
    RefrigerationFridgeFreezerEventTemperatureAlarmFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SetpointTemperatureFreezer")]
    RefrigerationFridgeFreezerSettingSetpointTemperatureFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SetpointTemperatureRefrigerator")]
    RefrigerationFridgeFreezerSettingSetpointTemperatureRefrigerator,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SuperModeFreezer")]
    RefrigerationFridgeFreezerSettingSuperModeFreezer,
    #[strum(serialize = "Refrigeration.FridgeFreezer.Setting.SuperModeRefrigerator")]
    RefrigerationFridgeFreezerSettingSuperModeRefrigerator,
}

open_key!(EventKey);
