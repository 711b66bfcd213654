quantity!(RupeesPerLitre, suffix: "₹/L", precision: 2);
quantity!(RupeesPerKilowattHour, suffix: "₹/kWh", precision: 2);
quantity!(RupeesPerKilometer, suffix: "₹/km", precision: 2);
