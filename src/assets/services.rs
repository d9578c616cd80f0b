use tracing::{debug, info, warn};

use crate::asset_store::AssetStore;
use crate::assets::dto::{AssetDetails, AssetFilter, DashboardSummary, DeleteOutcome, NewAssetForm};
use crate::assets::repo_types::{Asset, Quality, OTHER_TYPE, PRESET_TYPES};
use crate::assets::sanitize::sanitize;
use crate::error::{AppError, AppResult};

/// Keep assets matching `search` (case-insensitive, name or description) and,
/// when set, exactly matching `asset_type`. Order is preserved.
pub fn filter_assets(assets: &[Asset], search: &str, asset_type: Option<&str>) -> Vec<Asset> {
    let needle = search.to_lowercase();
    let asset_type = asset_type.filter(|t| !t.is_empty());
    assets
        .iter()
        .filter(|a| a.matches_search(&needle))
        .filter(|a| asset_type.map_or(true, |t| a.file_type == t))
        .cloned()
        .collect()
}

pub fn summarize(assets: &[Asset]) -> DashboardSummary {
    DashboardSummary {
        total_assets: assets.len(),
        total_value: assets.iter().map(|a| a.purchase_price).sum(),
        last_updated: assets.iter().map(|a| a.updated_at).max(),
    }
}

impl AssetStore {
    /// Validate the form, then append a new asset to the session user's list.
    /// Nothing is written when validation fails.
    pub fn add_asset(&mut self, form: NewAssetForm) -> AppResult<Asset> {
        let user = self.require_user()?;

        let name = sanitize(&form.name);
        let description = sanitize(&form.description);
        let custom_type = sanitize(&form.custom_type);
        let selected_type = form.asset_type.trim();

        if name.is_empty() {
            return Err(AppError::validation("Please enter an asset name!"));
        }
        if selected_type.is_empty()
            || (selected_type != OTHER_TYPE && !PRESET_TYPES.contains(&selected_type))
        {
            return Err(AppError::validation("Please select an asset type!"));
        }
        let quality: Quality = form
            .quality
            .parse()
            .map_err(|_| AppError::validation("Please select a quality rating!"))?;
        let year_purchased = form
            .year_purchased
            .as_ref()
            .and_then(|v| v.as_year())
            .ok_or_else(|| AppError::validation("Please enter the year purchased!"))?;
        let file_type = if selected_type == OTHER_TYPE {
            if custom_type.is_empty() {
                return Err(AppError::validation("Please enter a new type!"));
            }
            custom_type
        } else {
            selected_type.to_string()
        };

        let mut assets = Asset::load_for_user(self.kv(), user.id)?;
        let now = self.now();
        let id = self.next_id(now, |candidate| assets.iter().any(|a| a.id == candidate));
        let asset = Asset {
            id,
            name,
            description,
            file_type,
            year_purchased,
            purchase_price: form
                .purchase_price
                .as_ref()
                .and_then(|v| v.as_amount())
                .unwrap_or(0.0),
            year_sold: form.year_sold.as_ref().and_then(|v| v.as_year()),
            sold_price: form.sold_price.as_ref().and_then(|v| v.as_amount()),
            quality,
            user_id: user.id,
            created_at: now,
            updated_at: now,
        };

        assets.push(asset.clone());
        Asset::save_for_user(self.kv(), user.id, &assets)?;

        info!(user_id = user.id, asset_id = asset.id, file_type = %asset.file_type, "asset added");
        Ok(asset)
    }

    /// Remove an asset once the user has confirmed. Unknown ids leave the
    /// stored list untouched.
    pub fn delete_asset(&mut self, id: i64, confirmed: bool) -> AppResult<DeleteOutcome> {
        let user = self.require_user()?;
        if !confirmed {
            debug!(user_id = user.id, asset_id = id, "delete not confirmed");
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut assets = Asset::load_for_user(self.kv(), user.id)?;
        let before = assets.len();
        assets.retain(|a| a.id != id);
        if assets.len() == before {
            warn!(user_id = user.id, asset_id = id, "delete of unknown asset");
            return Ok(DeleteOutcome::NotFound);
        }

        Asset::save_for_user(self.kv(), user.id, &assets)?;
        info!(user_id = user.id, asset_id = id, "asset deleted");
        Ok(DeleteOutcome::Deleted)
    }

    pub fn asset(&self, id: i64) -> AppResult<Asset> {
        let user = self.require_user()?;
        Asset::load_for_user(self.kv(), user.id)?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(AppError::AssetNotFound(id))
    }

    pub fn view_asset(&self, id: i64) -> AppResult<AssetDetails> {
        self.asset(id).map(|a| AssetDetails::from(&a))
    }

    pub fn list_assets(&self) -> AppResult<Vec<Asset>> {
        let user = self.require_user()?;
        Ok(Asset::load_for_user(self.kv(), user.id)?)
    }

    pub fn filter(&self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let assets = self.list_assets()?;
        Ok(filter_assets(
            &assets,
            filter.search.as_deref().unwrap_or(""),
            filter.asset_type.as_deref(),
        ))
    }

    pub fn dashboard(&self) -> AppResult<DashboardSummary> {
        Ok(summarize(&self.list_assets()?))
    }
}
