//! Serde support for [`Optional`] and [`Outcome`].
//!
//! Both containers use a fixed tri-field layout, with `null` standing in for the field that
//! doesn't apply to the current status:
//!
//! ```json
//! {"status": "Some", "value": 1}
//! {"status": "None", "value": null}
//! {"status": "Ok", "value": 1, "error": null}
//! {"status": "Err", "value": null, "error": "boom"}
//! ```

use serde::de::{Error, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Optional, Outcome};

#[derive(Serialize, Deserialize)]
enum OptionalStatus {
    Some,
    None,
}

#[derive(Serialize, Deserialize)]
enum OutcomeStatus {
    Ok,
    Err,
}

/// A payload field: `None` when absent, `Some(None)` when present as `null`.
type Field<T> = Option<Option<T>>;

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct OptionalRepr<T> {
    status: OptionalStatus,
    #[serde(default, deserialize_with = "present")]
    value: Field<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"))]
struct OutcomeRepr<T, E> {
    status: OutcomeStatus,
    #[serde(default, deserialize_with = "present")]
    value: Field<T>,
    #[serde(default, deserialize_with = "present")]
    error: Field<E>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Field<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Resolves the payload matching the status. A `null` payload is read back as a unit, so that
/// payloads serialized as `null` (such as `()` or `Option::None`) survive the round trip.
fn payload<'de, T, E>(field: Field<T>, name: &'static str) -> Result<T, E>
where
    T: Deserialize<'de>,
    E: Error,
{
    match field {
        Some(Some(value)) => Ok(value),
        Some(None) => T::deserialize(<() as IntoDeserializer<'de, E>>::into_deserializer(())),
        None => Err(E::missing_field(name)),
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Optional", 2)?;
        match self {
            Optional::Some(value) => {
                state.serialize_field("status", &OptionalStatus::Some)?;
                state.serialize_field("value", value)?;
            },
            Optional::None => {
                state.serialize_field("status", &OptionalStatus::None)?;
                state.serialize_field("value", &())?;
            },
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OptionalRepr::<T>::deserialize(deserializer)?;
        match repr.status {
            OptionalStatus::Some => Ok(Optional::Some(payload::<T, D::Error>(repr.value, "value")?)),
            OptionalStatus::None => Ok(Optional::None),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        match self {
            Outcome::Ok(value) => {
                state.serialize_field("status", &OutcomeStatus::Ok)?;
                state.serialize_field("value", value)?;
                state.serialize_field("error", &())?;
            },
            Outcome::Err(error) => {
                state.serialize_field("status", &OutcomeStatus::Err)?;
                state.serialize_field("value", &())?;
                state.serialize_field("error", error)?;
            },
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OutcomeRepr::<T, E>::deserialize(deserializer)?;
        match repr.status {
            OutcomeStatus::Ok => Ok(Outcome::Ok(payload::<T, D::Error>(repr.value, "value")?)),
            OutcomeStatus::Err => Ok(Outcome::Err(payload::<E, D::Error>(repr.error, "error")?)),
        }
    }
}

/// `Value` maps onto the serde data model directly, except for its containers, which use the
/// layout above. Both empty sentinels are written as `null` and read back as `Value::Null`, and a
/// `Some` holding `null` is read back as `None`.
#[cfg(feature = "value")]
mod value {
    use std::fmt::{self, Formatter};

    use serde::de::{Error, MapAccess, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::value::Value;
    use crate::{Optional, Outcome};

    const FIELDS: &[&str] = &["status", "value", "error"];
    const STATUSES: &[&str] = &["Some", "None", "Ok", "Err"];

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Undefined | Value::Null => serializer.serialize_unit(),
                Value::Bool(value) => serializer.serialize_bool(*value),
                Value::Int(value) => serializer.serialize_i64(*value),
                Value::Float(value) => serializer.serialize_f64(*value),
                Value::Str(value) => serializer.serialize_str(value),
                Value::List(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                },
                Value::Optional(optional) => optional.serialize(serializer),
                Value::Outcome(outcome) => outcome.serialize(serializer),
            }
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str("a dynamic value")
        }

        fn visit_unit<E: Error>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_none<E: Error>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
            Value::deserialize(deserializer)
        }

        fn visit_bool<E: Error>(self, value: bool) -> Result<Value, E> {
            Ok(Value::Bool(value))
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<Value, E> {
            Ok(Value::Int(value))
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Value, E> {
            Ok(i64::try_from(value).map_or(Value::Float(value as f64), Value::Int))
        }

        fn visit_f64<E: Error>(self, value: f64) -> Result<Value, E> {
            Ok(Value::Float(value))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Value, E> {
            Ok(Value::from(value))
        }

        fn visit_string<E: Error>(self, value: String) -> Result<Value, E> {
            Ok(Value::Str(value))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(Value::List(items))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
            let mut status = None;
            let mut value = Value::Null;
            let mut error = Value::Null;

            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "status" => status = Some(map.next_value::<String>()?),
                    "value" => value = map.next_value()?,
                    "error" => error = map.next_value()?,
                    other => return Err(A::Error::unknown_field(other, FIELDS)),
                }
            }

            match status.as_deref() {
                Some("Some") => Ok(Value::from(Optional::from_nullable(value))),
                Some("None") => Ok(Value::from(Optional::<Value>::None)),
                Some("Ok") => Ok(Value::from(Outcome::<Value, Value>::Ok(value))),
                Some("Err") => Ok(Value::from(Outcome::<Value, Value>::Err(error))),
                Some(other) => Err(A::Error::unknown_variant(other, STATUSES)),
                None => Err(A::Error::missing_field("status")),
            }
        }
    }
}
