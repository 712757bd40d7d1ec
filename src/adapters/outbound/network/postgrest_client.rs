use crate::adapters::outbound::rows::{BomMasterRow, ComponentRow, ProductRow};
use crate::formula::domain::{BomLine, IngredientComponent, Product};
use crate::ports::outbound::{BomStore, ComponentStore, ProductStore};
use crate::shared::error::LabdocError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::time::Duration;

const PRODUCTS_TABLE: &str = "labdoc_products";
const BOM_TABLE: &str = "bom_master";
const COMPONENTS_TABLE: &str = "labdoc_ingredient_components";

/// Builds PostgREST query URLs for the three tables read by the formula
/// engine
///
/// Filter values are percent-encoded; `in` lists are quoted so codes
/// containing commas or parentheses survive.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgrestQuery {
    base_url: String,
}

impl PostgrestQuery {
    /// `base_url` is the REST root, e.g. `https://project.supabase.co/rest/v1`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn product(&self, product_code: &str) -> String {
        format!(
            "{}/{}?select=*&product_code=eq.{}&limit=1",
            self.base_url,
            PRODUCTS_TABLE,
            urlencoding::encode(product_code)
        )
    }

    pub fn bom_lines(&self, semi_product_code: &str) -> String {
        format!(
            "{}/{}?select=prdcode,materialcode,materialname,usemount&prdcode=eq.{}&order=usemount.desc.nullslast",
            self.base_url,
            BOM_TABLE,
            urlencoding::encode(semi_product_code)
        )
    }

    pub fn components<'a>(&self, ingredient_codes: impl IntoIterator<Item = &'a String>) -> String {
        let quoted: Vec<String> = ingredient_codes
            .into_iter()
            .map(|code| format!("\"{}\"", code.replace('\\', "\\\\").replace('"', "\\\"")))
            .collect();
        let list = format!("({})", quoted.join(","));

        format!(
            "{}/{}?select=*&ingredient_code=in.{}&order=ingredient_code.asc,component_order.asc.nullslast",
            self.base_url,
            COMPONENTS_TABLE,
            urlencoding::encode(&list)
        )
    }
}

/// PostgrestStore adapter reading products, BOM lines and components from a
/// PostgREST endpoint (Supabase REST API)
///
/// One request per query, no retries. Failures surface as
/// `LabdocError::StoreRequest` or `LabdocError::MalformedResponse`.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    query: PostgrestQuery,
    api_key: Option<String>,
}

impl PostgrestStore {
    /// Creates a store client
    ///
    /// When `api_key` is given it is sent both as `apikey` and as a bearer
    /// token, which is what Supabase expects.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(LabdocError::StoreNotConfigured {
                hint: "Pass --store-url, set store_url in labdoc.config.yml or set LABDOC_STORE_URL".to_string(),
            }
            .into());
        }

        let user_agent = format!("labdoc/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            query: PostgrestQuery::new(base_url),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, resource: &str, url: &str) -> Result<Vec<T>> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await.map_err(|e| LabdocError::StoreRequest {
            resource: resource.to_string(),
            details: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LabdocError::StoreRequest {
                resource: resource.to_string(),
                details: format!("HTTP {}: {}", status, body.trim()),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| LabdocError::StoreRequest {
            resource: resource.to_string(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            LabdocError::MalformedResponse {
                resource: resource.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl ProductStore for PostgrestStore {
    async fn find_product(&self, product_code: &str) -> Result<Option<Product>> {
        let rows: Vec<ProductRow> = self
            .fetch_rows(PRODUCTS_TABLE, &self.query.product(product_code))
            .await?;
        Ok(rows.into_iter().next().map(Product::from))
    }
}

#[async_trait]
impl BomStore for PostgrestStore {
    async fn find_bom_lines(&self, semi_product_code: &str) -> Result<Vec<BomLine>> {
        let rows: Vec<BomMasterRow> = self
            .fetch_rows(BOM_TABLE, &self.query.bom_lines(semi_product_code))
            .await?;
        Ok(rows.into_iter().map(BomLine::from).collect())
    }
}

#[async_trait]
impl ComponentStore for PostgrestStore {
    async fn find_components(&self, ingredient_codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>> {
        if ingredient_codes.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<ComponentRow> = self
            .fetch_rows(COMPONENTS_TABLE, &self.query.components(ingredient_codes))
            .await?;
        Ok(rows.into_iter().map(IngredientComponent::from).collect())
    }
}
