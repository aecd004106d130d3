// ── Program keys ──

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of an appliance program (`*.Program.*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum ProgramKey {
    #[strum(serialize = "unknown")]
    Unknown,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Program.Basic.GoHome")]
    ConsumerProductsCleaningRobotBasicGoHome,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Program.Cleaning.CleanAll")]
    ConsumerProductsCleaningRobotCleaningCleanAll,
    #[strum(serialize = "ConsumerProducts.CleaningRobot.Program.Cleaning.CleanMap")]
    ConsumerProductsCleaningRobotCleaningCleanMap,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.CaffeGrande")]
    ConsumerProductsCoffeeMakerBeverageCaffeGrande,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.CaffeLatte")]
    ConsumerProductsCoffeeMakerBeverageCaffeLatte,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.Cappuccino")]
    ConsumerProductsCoffeeMakerBeverageCappuccino,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.Coffee")]
    ConsumerProductsCoffeeMakerBeverageCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.Espresso")]
    ConsumerProductsCoffeeMakerBeverageEspresso,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.EspressoDoppio")]
    ConsumerProductsCoffeeMakerBeverageEspressoDoppio,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.EspressoMacchiato")]
    ConsumerProductsCoffeeMakerBeverageEspressoMacchiato,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.HotWater")]
    ConsumerProductsCoffeeMakerBeverageHotWater,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.LatteMacchiato")]
    ConsumerProductsCoffeeMakerBeverageLatteMacchiato,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.MilkFroth")]
    ConsumerProductsCoffeeMakerBeverageMilkFroth,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.Ristretto")]
    ConsumerProductsCoffeeMakerBeverageRistretto,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.WarmMilk")]
    ConsumerProductsCoffeeMakerBeverageWarmMilk,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.Beverage.XLCoffee")]
    ConsumerProductsCoffeeMakerBeverageXLCoffee,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Americano")]
    ConsumerProductsCoffeeMakerCoffeeWorldAmericano,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.BlackEye")]
    ConsumerProductsCoffeeMakerCoffeeWorldBlackEye,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.CafeAuLait")]
    ConsumerProductsCoffeeMakerCoffeeWorldCafeAuLait,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.CafeConLeche")]
    ConsumerProductsCoffeeMakerCoffeeWorldCafeConLeche,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.CafeCortado")]
    ConsumerProductsCoffeeMakerCoffeeWorldCafeCortado,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Cortado")]
    ConsumerProductsCoffeeMakerCoffeeWorldCortado,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.DeadEye")]
    ConsumerProductsCoffeeMakerCoffeeWorldDeadEye,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Doppio")]
    ConsumerProductsCoffeeMakerCoffeeWorldDoppio,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.FlatWhite")]
    ConsumerProductsCoffeeMakerCoffeeWorldFlatWhite,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Galao")]
    ConsumerProductsCoffeeMakerCoffeeWorldGalao,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Garoto")]
    ConsumerProductsCoffeeMakerCoffeeWorldGaroto,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.GrosserBrauner")]
    ConsumerProductsCoffeeMakerCoffeeWorldGrosserBrauner,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Kaapi")]
    ConsumerProductsCoffeeMakerCoffeeWorldKaapi,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.KleinerBrauner")]
    ConsumerProductsCoffeeMakerCoffeeWorldKleinerBrauner,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.KoffieVerkeerd")]
    ConsumerProductsCoffeeMakerCoffeeWorldKoffieVerkeerd,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.RedEye")]
    ConsumerProductsCoffeeMakerCoffeeWorldRedEye,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.Verlaengerter")]
    ConsumerProductsCoffeeMakerCoffeeWorldVerlaengerter,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.VerlaengerterBraun")]
    ConsumerProductsCoffeeMakerCoffeeWorldVerlaengerterBraun,
    #[strum(serialize = "ConsumerProducts.CoffeeMaker.Program.CoffeeWorld.WienerMelange")]
    ConsumerProductsCoffeeMakerCoffeeWorldWienerMelange,
    #[strum(serialize = "Cooking.Oven.Program.HeatingMode.HotAir")]
    CookingOvenHeatingModeHotAir,
    #[strum(serialize = "Cooking.Oven.Program.HeatingMode.PizzaSetting")]
    CookingOvenHeatingModePizzaSetting,
    #[strum(serialize = "Cooking.Oven.Program.HeatingMode.PreHeating")]
    CookingOvenHeatingModePreHeating,
    #[strum(serialize = "Cooking.Oven.Program.HeatingMode.TopBottomHeating")]
    CookingOvenHeatingModeTopBottomHeating,
    #[strum(serialize = "Dishcare.Dishwasher.Program.Auto2")]
    DishcareDishwasherAuto2,
    #[strum(serialize = "Dishcare.Dishwasher.Program.Eco50")]
    DishcareDishwasherEco50,
    #[strum(serialize = "Dishcare.Dishwasher.Program.Intensiv70")]
    DishcareDishwasherIntensiv70,
    #[strum(serialize = "Dishcare.Dishwasher.Program.Quick45")]
    DishcareDishwasherQuick45,
    #[strum(serialize = "LaundryCare.Dryer.Program.Cotton")]
    LaundryCareDryerCotton,
    #[strum(serialize = "LaundryCare.Dryer.Program.Synthetic")]
    LaundryCareDryerSynthetic,
    #[strum(serialize = "LaundryCare.Washer.Program.Cotton")]
    LaundryCareWasherCotton,
    #[strum(serialize = "LaundryCare.Washer.Program.EasyCare")]
    LaundryCareWasherEasyCare,
    #[strum(serialize = "LaundryCare.Washer.Program.Wool")]
    LaundryCareWasherWool,
}

open_key!(ProgramKey);
