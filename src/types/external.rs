use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RcName {
    pub common: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RcCurrency {
    pub name: Option<String>,
}

/// One record of the restcountries v3.1 `/all` payload. Only the fields the
/// queries read are kept; everything else in the upstream object is ignored.
/// Absent and `null` fields both fall back to their defaults.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RcCountry {
    pub name: Option<RcName>,
    #[serde(deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub population: u64,
    pub languages: Option<HashMap<String, String>>,
    pub currencies: Option<HashMap<String, RcCurrency>>,
    #[serde(deserialize_with = "null_as_default")]
    pub landlocked: bool,
    pub gini: Option<HashMap<String, f64>>,
    pub subregion: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub timezones: Vec<String>,
}

impl RcCountry {
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.common.as_deref())
    }
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
