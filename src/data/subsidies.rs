use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Subsidy {
    pub state: &'static str,
    pub summary: &'static str,
}

const SUBSIDIES: &[Subsidy] = &[
    Subsidy {
        state: "Karnataka",
        summary: "EV buyers get up to ₹1.5 lakh subsidy + road tax exemption.",
    },
    Subsidy {
        state: "Maharashtra",
        summary: "Subsidy up to ₹2.5 lakh for EVs, scrappage incentive included.",
    },
    Subsidy {
        state: "Delhi",
        summary: "₹10,000 per kWh subsidy, max ₹1.5 lakh + registration waived.",
    },
    Subsidy { state: "Tamil Nadu", summary: "Road tax exemption + state EV policy benefits." },
    Subsidy { state: "Gujarat", summary: "₹10,000 per kWh, max subsidy ₹1.5 lakh." },
];

#[must_use]
pub const fn all() -> &'static [Subsidy] {
    SUBSIDIES
}

/// Look the state up ignoring the case and whitespace, so that `tamilnadu` finds «Tamil Nadu».
#[must_use]
pub fn find(state: &str) -> Option<&'static Subsidy> {
    let needle = normalize(state);
    SUBSIDIES.iter().find(|subsidy| normalize(subsidy.state) == needle)
}

fn normalize(state: &str) -> String {
    state.chars().filter(|character| !character.is_whitespace()).flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ok() {
        assert_eq!(find("Karnataka").map(|subsidy| subsidy.state), Some("Karnataka"));
        assert_eq!(find("  delhi ").map(|subsidy| subsidy.state), Some("Delhi"));
        assert_eq!(find("TamilNadu").map(|subsidy| subsidy.state), Some("Tamil Nadu"));
    }

    #[test]
    fn test_find_unknown() {
        assert_eq!(find("Atlantis"), None);
        assert_eq!(find(""), None);
    }
}
