use serde::{Deserialize, Serialize};

/// One airport as returned by the upstream locations endpoint.
///
/// Field names are camelCase on the wire. `address` can be partially or
/// entirely absent upstream, so its fields are optional and default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    pub iata_code: String,
    pub name: String,
    #[serde(default)]
    pub address: Address,
    pub geo_code: GeoCode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
}

/// Payload shared by the upstream locations endpoint and the proxy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<AirportRecord>,
}

/// Body of the token exchange response; everything but the token is ignored.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Request body accepted by `POST /search-airport`.
///
/// The field is optional so a missing key can be rejected with a 400 rather
/// than a deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchAirportRequest {
    pub airport: Option<String>,
}

/// Error body returned by the proxy on 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upstream_location_payload() {
        let payload = r#"{
            "data": [
                {
                    "iataCode": "MAD",
                    "name": "ADOLFO SUAREZ BARAJAS",
                    "address": { "cityName": "MADRID", "countryName": "SPAIN" },
                    "geoCode": { "latitude": 40.49810, "longitude": -3.56764 }
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.data.len(), 1);
        let airport = &response.data[0];
        assert_eq!(airport.iata_code, "MAD");
        assert_eq!(airport.address.city_name.as_deref(), Some("MADRID"));
        assert!((airport.geo_code.latitude - 40.49810).abs() < 1e-9);
    }

    #[test]
    fn missing_address_defaults_to_empty() {
        let payload = r#"{
            "iataCode": "XYZ",
            "name": "SOMEWHERE",
            "geoCode": { "latitude": 0.0, "longitude": 0.0 }
        }"#;

        let airport: AirportRecord = serde_json::from_str(payload).unwrap();
        assert!(airport.address.city_name.is_none());
        assert!(airport.address.country_name.is_none());
    }

    #[test]
    fn empty_data_array_is_valid() {
        let response: SearchResponse = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(response.data.is_empty());
    }
}
