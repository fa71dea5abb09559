//! Runtime arm options
//!
//! Calibration tools may patch a subset of the geometry while the machine is
//! running. A patch is an `ArmOptions` where only the options to change are
//! `Some`.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::KinError;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An option that can be read or changed at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArmOption {
    /// Key `effector-height` or `H`
    EffectorHeight,

    /// Key `arm-length` or `L`
    ArmLength,

    /// Key `printable-radius` or `R`
    PrintableRadius,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A sparse set of arm option values.
///
/// Units: millimeters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ArmOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effector_height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_length: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub printable_radius: Option<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArmOption {
    /// All options in key order.
    pub const ALL: [ArmOption; 3] = [
        ArmOption::EffectorHeight,
        ArmOption::ArmLength,
        ArmOption::PrintableRadius,
    ];

    /// The long key for this option.
    pub fn key(&self) -> &'static str {
        match self {
            ArmOption::EffectorHeight => "effector-height",
            ArmOption::ArmLength => "arm-length",
            ArmOption::PrintableRadius => "printable-radius",
        }
    }

    /// The single letter key for this option.
    pub fn letter(&self) -> char {
        match self {
            ArmOption::EffectorHeight => 'H',
            ArmOption::ArmLength => 'L',
            ArmOption::PrintableRadius => 'R',
        }
    }
}

impl FromStr for ArmOption {
    type Err = KinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "effector-height" | "H" => Ok(ArmOption::EffectorHeight),
            "arm-length" | "L" => Ok(ArmOption::ArmLength),
            "printable-radius" | "R" => Ok(ArmOption::PrintableRadius),
            _ => Err(KinError::UnknownOption(s.to_string())),
        }
    }
}

impl ArmOptions {
    /// Build a set of options from `(key, value)` pairs.
    ///
    /// Fails on the first unrecognised key. If a key appears more than once
    /// the last value wins.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, KinError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();

        for (key, value) in pairs {
            options.set(key.as_ref().parse()?, value);
        }

        Ok(options)
    }

    /// Get the value of an option, if present.
    pub fn get(&self, option: ArmOption) -> Option<f64> {
        match option {
            ArmOption::EffectorHeight => self.effector_height,
            ArmOption::ArmLength => self.arm_length,
            ArmOption::PrintableRadius => self.printable_radius,
        }
    }

    /// Set the value of an option.
    pub fn set(&mut self, option: ArmOption, value: f64) {
        match option {
            ArmOption::EffectorHeight => self.effector_height = Some(value),
            ArmOption::ArmLength => self.arm_length = Some(value),
            ArmOption::PrintableRadius => self.printable_radius = Some(value),
        }
    }

    /// Iterate over the options which are present.
    pub fn iter(&self) -> impl Iterator<Item = (ArmOption, f64)> + '_ {
        let all: &'static [ArmOption; 3] = &ArmOption::ALL;

        all.iter()
            .filter_map(move |&o| self.get(o).map(|v| (o, v)))
    }

    /// True if no option is present.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_keys() {
        for option in ArmOption::ALL.iter() {
            assert_eq!(option.key().parse::<ArmOption>().unwrap(), *option);
            assert_eq!(
                option.letter().to_string().parse::<ArmOption>().unwrap(),
                *option
            );
        }

        match "arm_length".parse::<ArmOption>() {
            Err(KinError::UnknownOption(k)) => assert_eq!(k, "arm_length"),
            r => panic!("Expected an unknown option error, got {:?}", r),
        }
    }

    #[test]
    fn test_from_pairs() {
        let options = ArmOptions::from_pairs(vec![("arm-length", 320.0), ("R", 150.0)]).unwrap();

        assert_eq!(options.effector_height, None);
        assert_eq!(options.arm_length, Some(320.0));
        assert_eq!(options.printable_radius, Some(150.0));
        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![(ArmOption::ArmLength, 320.0), (ArmOption::PrintableRadius, 150.0)]
        );

        assert!(ArmOptions::from_pairs(vec![("L", 1.0), ("X", 2.0)]).is_err());
        assert!(ArmOptions::from_pairs(Vec::<(String, f64)>::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_serialise_for_persistence() {
        let options = ArmOptions {
            effector_height: Some(70.0),
            arm_length: Some(320.0),
            printable_radius: None,
        };

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"effector-height":70.0,"arm-length":320.0}"#);

        let restored: ArmOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }
}
