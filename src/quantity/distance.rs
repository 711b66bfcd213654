quantity!(Kilometers, suffix: "km", precision: 0);
