//! Per-action execution modes and the simulated-actions selector.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Wire marker selecting every action a watch defines.
const ALL_ACTIONS: &str = "_all";

/// Per-action directive overriding how one action behaves for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionExecutionMode {
    /// Run the action without producing real side effects.
    Simulate,
    /// Simulate the action even when it is throttled.
    ForceSimulate,
    /// Run the action normally.
    Execute,
    /// Run the action even when it is throttled.
    ForceExecute,
    /// Do not run the action at all.
    Skip,
}

/// Selector for which actions run in simulated (no-side-effect) mode.
///
/// Serializes as the string `"_all"` or as an array of action ids, the two
/// wire shapes the cluster accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedActions {
    /// Simulate every action the watch defines.
    All,
    /// Simulate only the named actions.
    Actions(Vec<String>),
}

impl SimulatedActions {
    /// Selects every action for simulation.
    pub fn all() -> Self {
        Self::All
    }

    /// Selects an explicit set of action ids for simulation.
    pub fn actions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Actions(ids.into_iter().map(Into::into).collect())
    }
}

impl Serialize for SimulatedActions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(ALL_ACTIONS),
            Self::Actions(ids) => {
                let mut seq = serializer.serialize_seq(Some(ids.len()))?;
                for id in ids {
                    seq.serialize_element(id)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for SimulatedActions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SimulatedActionsVisitor;

        impl<'de> Visitor<'de> for SimulatedActionsVisitor {
            type Value = SimulatedActions;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "the string {ALL_ACTIONS:?} or a list of action ids")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == ALL_ACTIONS {
                    Ok(SimulatedActions::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut ids = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(id) = seq.next_element::<String>()? {
                    ids.push(id);
                }
                Ok(SimulatedActions::Actions(ids))
            }
        }

        deserializer.deserialize_any(SimulatedActionsVisitor)
    }
}
