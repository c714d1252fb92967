//! Closed label vocabularies.
//!
//! Each variant serializes as its Japanese label, which is the value stored
//! and exchanged with downstream collaborators. `key()` gives the stable
//! ASCII identifier used in logs and CLI flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::LabelError;

/// Shared shape of the four closed vocabularies, for code that treats every
/// category the same way (pattern tables, reference vectors).
pub trait Vocabulary:
    Copy + Eq + Ord + std::hash::Hash + fmt::Debug + Send + Sync + 'static
{
    /// Category name, e.g. `"domain"`.
    const NAME: &'static str;

    /// Every value, in declaration order.
    fn all() -> &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $vocab:tt {
            $( $variant:ident => ($key:tt, $label:tt) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Japanese label (the serialized form).
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// ASCII identifier.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl Vocabulary for $name {
            const NAME: &'static str = $vocab;

            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn key(self) -> &'static str {
                $name::key(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = LabelError;

            /// Accepts either the Japanese label or the ASCII key.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s || v.key().eq_ignore_ascii_case(s))
                    .ok_or_else(|| LabelError::UnknownLabel {
                        vocabulary: <$name as Vocabulary>::NAME.to_string(),
                        value: s.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// Functional category of a passage.
    ContentType as "content_type" {
        Decision => ("decision", "決定事項"),
        Issue => ("issue", "課題"),
        ActionItem => ("action_item", "行動項目"),
        Information => ("information", "情報共有"),
        Discussion => ("discussion", "議論"),
        Other => ("other", "その他"),
    }
}

vocabulary! {
    /// Professional discipline a passage relates to.
    Domain as "domain" {
        Structure => ("structure", "構造"),
        Equipment => ("equipment", "設備"),
        ConstructionManagement => ("construction_management", "施工管理"),
        Design => ("design", "設計"),
        Safety => ("safety", "安全"),
        Quality => ("quality", "品質"),
        Cost => ("cost", "コスト"),
        Schedule => ("schedule", "工程"),
        Other => ("other", "その他"),
    }
}

vocabulary! {
    /// Priority level. Declared low to high so the derived `Ord` is the
    /// escalation order: `Low < Medium < High`.
    Priority as "priority" {
        Low => ("low", "低"),
        Medium => ("medium", "中"),
        High => ("high", "高"),
    }
}

vocabulary! {
    /// Party a passage concerns.
    Stakeholder as "stakeholder" {
        Client => ("client", "発注者"),
        Designer => ("designer", "設計者"),
        Contractor => ("contractor", "施工者"),
        Supervisor => ("supervisor", "監理者"),
        Subcontractor => ("subcontractor", "協力業者"),
        Other => ("other", "その他"),
    }
}

impl Priority {
    /// Order in which rule patterns are tested: the first hit wins.
    pub const DETECTION_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_orders_low_to_high() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(Priority::ALL.iter().max(), Some(&Priority::High));
    }

    #[test]
    fn serializes_as_japanese_label() {
        let json = serde_json::to_string(&ContentType::Decision).unwrap();
        assert_eq!(json, "\"決定事項\"");
        let back: Domain = serde_json::from_str("\"施工管理\"").unwrap();
        assert_eq!(back, Domain::ConstructionManagement);
    }

    #[test]
    fn parses_label_or_key() {
        assert_eq!("高".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(
            "subcontractor".parse::<Stakeholder>().unwrap(),
            Stakeholder::Subcontractor
        );
    }

    #[test]
    fn unknown_label_names_vocabulary() {
        let err = "urgent-ish".parse::<Priority>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("priority"));
        assert!(msg.contains("urgent-ish"));
    }

    #[test]
    fn all_lists_declaration_order() {
        assert_eq!(ContentType::ALL.first(), Some(&ContentType::Decision));
        assert_eq!(Domain::ALL.len(), 9);
        assert_eq!(Stakeholder::ALL.len(), 6);
    }
}
