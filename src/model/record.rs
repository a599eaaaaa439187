//! Data models for case-study records (wire shape and flattened view shape)

use serde::{Deserialize, Serialize};

/// Tag namespace that carries the industry classification
pub const INDUSTRY_TAG_NAMESPACE: &str = "GLOBAL#industry";

/// Column headers shared by the on-screen table and the xlsx export
pub const COLUMN_HEADERS: [&str; 8] = [
    "Customer Logo",
    "Customer Name",
    "Headline",
    "URL",
    "Description Summary",
    "Page URL",
    "Location",
    "Industry",
];

/// Top-level response body served at /api/data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<RawRecord>,
}

/// One case-study entry as served on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub item: RawItem,
    #[serde(default)]
    pub tags: Vec<RawTag>,
}

/// Inner item payload of a raw record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "additionalFields")]
    pub additional_fields: AdditionalFields,
}

/// Display fields nested inside a raw item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    #[serde(default)]
    pub image_src_url: String,
    #[serde(default, rename = "customer-name")]
    pub customer_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub headline_url: String,
    #[serde(default)]
    pub description_summary: String,
    #[serde(default)]
    pub display_location: String,
}

/// Namespaced tag attached to a raw record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTag {
    #[serde(default)]
    pub tag_namespace_id: String,
    #[serde(default)]
    pub name: String,
}

/// Flattened view of one case study, rebuilt on every fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub logo_url: String,
    pub customer_name: String,
    pub headline: String,
    pub url: String,
    pub description_summary: String,
    pub page_url: String,
    pub location: String,
    pub industry: String,
}

impl CaseStudy {
    /// Flatten one raw record; absent fields stay empty
    pub fn from_raw(raw: &RawRecord) -> Self {
        let fields = &raw.item.additional_fields;
        let industry = raw
            .tags
            .iter()
            .find(|tag| tag.tag_namespace_id == INDUSTRY_TAG_NAMESPACE)
            .map(|tag| tag.name.clone())
            .unwrap_or_default();

        CaseStudy {
            id: raw.item.id.clone(),
            logo_url: fields.image_src_url.clone(),
            customer_name: fields.customer_name.clone(),
            headline: fields.headline.clone(),
            url: fields.headline_url.clone(),
            description_summary: fields.description_summary.clone(),
            page_url: fields.headline_url.clone(),
            location: fields.display_location.clone(),
            industry,
        }
    }

    /// Cell values in COLUMN_HEADERS order
    pub fn cells(&self) -> [String; 8] {
        [
            self.logo_url.clone(),
            self.customer_name.clone(),
            self.headline.clone(),
            self.url.clone(),
            self.description_summary.clone(),
            self.page_url.clone(),
            self.location.clone(),
            self.industry.clone(),
        ]
    }
}

/// Flatten a full catalog in item order
pub fn normalize(catalog: &Catalog) -> Vec<CaseStudy> {
    catalog.items.iter().map(CaseStudy::from_raw).collect()
}
