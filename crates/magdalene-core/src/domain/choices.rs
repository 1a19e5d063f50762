//! Closed enumerations accepted by the submission forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value outside one of the closed sets below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {set}")]
pub struct UnknownChoice {
    pub set: &'static str,
    pub value: String,
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, exactly as submitted and stored.
            pub const ALLOWED: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(UnknownChoice {
                        set: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set! {
    /// Countries the dealership delivers to.
    Country as "country" {
        India => "India",
        UnitedStates => "United States",
        Japan => "Japan",
        Greece => "Greece",
    }
}

closed_set! {
    /// Car models offered on the purchase form.
    CarModel as "car model" {
        TitanStrike => "titan_strike",
        CycloneX1 => "cyclone_x1",
        NebulaGlide => "nebula_glide",
        // Spelling matches the storefront's option values.
        PheonixPulse => "pheonix_pulse",
        ViperWave => "viper_wave",
        ElectraFury => "electra_fury",
        AuroraSpire => "aurora_spire",
        TurboBlitz => "turbo_blitz",
        Supra => "supra",
        RaptorX => "raptor_x",
        VelocityGt => "velocity_gt",
    }
}

closed_set! {
    /// Workshop services that can be booked.
    ServiceType as "service type" {
        DiagnosticTest => "Diagnostic Test",
        EngineServicing => "Engine Servicing",
        TireReplacement => "Tire Replacement",
        VacuumCleaning => "Vacuum Cleaning",
    }
}

closed_set! {
    /// Budget brackets on the quote form.
    BudgetBracket as "budget bracket" {
        Starter => "$1000-$5000",
        Mid => "$5000-$10,000",
        Premium => "$10,000+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_sets_have_expected_sizes() {
        assert_eq!(Country::ALLOWED.len(), 4);
        assert_eq!(CarModel::ALLOWED.len(), 11);
        assert_eq!(ServiceType::ALLOWED.len(), 4);
        assert_eq!(BudgetBracket::ALLOWED.len(), 3);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("United States".parse::<Country>(), Ok(Country::UnitedStates));
        assert_eq!("$10,000+".parse::<BudgetBracket>(), Ok(BudgetBracket::Premium));

        let err = "india".parse::<Country>().unwrap_err();
        assert_eq!(err.set, "country");
        assert_eq!(err.value, "india");
        assert!("Mars".parse::<Country>().is_err());
    }

    #[test]
    fn test_every_allowed_value_round_trips() {
        for value in CarModel::ALLOWED {
            assert_eq!(value.parse::<CarModel>().unwrap().as_str(), *value);
        }
        for value in ServiceType::ALLOWED {
            assert_eq!(value.parse::<ServiceType>().unwrap().to_string(), *value);
        }
    }

    #[test]
    fn test_serde_uses_form_values() {
        let json = serde_json::to_string(&ServiceType::TireReplacement).unwrap();
        assert_eq!(json, "\"Tire Replacement\"");
    }
}
