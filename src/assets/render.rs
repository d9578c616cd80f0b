//! HTML fragments for the asset page. Every interpolated value goes through
//! `escape`; sanitized input is not trusted to be markup-free.

use std::fmt::Write;

use crate::assets::dto::{format_price, format_timestamp, AssetDetails, DashboardSummary};
use crate::assets::repo_types::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full list; the empty state invites the first asset.
pub fn asset_grid(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return empty_state("fa-folder-open", "No assets yet", "Start by adding your first asset!");
    }
    cards(assets)
}

/// Search results; the empty state suggests loosening the filter.
pub fn filtered_grid(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return empty_state(
            "fa-search",
            "No assets found",
            "Try adjusting your search criteria.",
        );
    }
    cards(assets)
}

fn empty_state(icon: &str, title: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty-state"><i class="fas {icon}"></i><h3>{title}</h3><p>{hint}</p></div>"#
    )
}

fn cards(assets: &[Asset]) -> String {
    let mut html = String::new();
    for asset in assets {
        let description = if asset.description.is_empty() {
            "No description"
        } else {
            asset.description.as_str()
        };
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            concat!(
                r#"<div class="asset-card" data-id="{id}">"#,
                r#"<div class="asset-header"><div>"#,
                r#"<div class="asset-name">{name}</div>"#,
                r#"<span class="asset-type">{file_type}</span>"#,
                r#"</div></div>"#,
                r#"<div class="asset-description">{description}</div>"#,
                r#"<div class="asset-meta">"#,
                r#"<span class="quality-badge" style="background: {color};">{quality}</span>"#,
                r#"<span>{year}</span><span>{price}</span>"#,
                r#"</div>"#,
                r#"<div class="asset-actions">"#,
                r#"<a href="/api/v1/ui/assets/{id}" class="btn btn-primary"><i class="fas fa-eye"></i> View</a>"#,
                r#"<a href="/api/v1/ui/assets/{id}/delete" class="btn btn-danger"><i class="fas fa-trash"></i> Delete</a>"#,
                r#"</div></div>"#,
            ),
            id = asset.id,
            name = escape(&asset.name),
            file_type = escape(&asset.file_type),
            description = escape(description),
            color = asset.quality.color(),
            quality = asset.quality.label(),
            year = asset.year_purchased,
            price = format_price(asset.purchase_price),
        );
    }
    html
}

pub fn asset_details(d: &AssetDetails) -> String {
    format!(
        concat!(
            r#"<div class="asset-details">"#,
            r#"<h3>{name}</h3>"#,
            r#"<h4>Description</h4><p>{description}</p>"#,
            r#"<h4>Asset Information</h4>"#,
            r#"<p><strong>Name:</strong> {name}</p>"#,
            r#"<p><strong>Type:</strong> {file_type}</p>"#,
            r#"<p><strong>Quality:</strong> <span style="color: {color}; font-weight: bold;">{quality}</span></p>"#,
            r#"<p><strong>Year Purchased:</strong> {year_purchased}</p>"#,
            r#"<p><strong>Purchase Price:</strong> {purchase_price}</p>"#,
            r#"<p><strong>Year Sold:</strong> {year_sold}</p>"#,
            r#"<p><strong>Sold Price:</strong> {sold_price}</p>"#,
            r#"<p><strong>Created:</strong> {created}</p>"#,
            r#"<p><strong>Last Updated:</strong> {updated}</p>"#,
            r#"<a href="/api/v1/ui/assets/{id}/delete" class="btn btn-danger"><i class="fas fa-trash"></i> Delete</a>"#,
            r#"</div>"#,
        ),
        id = d.id,
        name = escape(&d.name),
        description = escape(&d.description),
        file_type = escape(&d.file_type),
        color = escape(&d.quality_color),
        quality = escape(&d.quality),
        year_purchased = escape(&d.year_purchased),
        purchase_price = escape(&d.purchase_price),
        year_sold = escape(&d.year_sold),
        sold_price = escape(&d.sold_price),
        created = escape(&d.created_at),
        updated = escape(&d.updated_at),
    )
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    let last_updated = summary
        .last_updated
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string());
    format!(
        concat!(
            r#"<div class="dashboard">"#,
            r#"<div class="stat"><span id="totalAssets">{total}</span> assets</div>"#,
            r#"<div class="stat"><span id="totalSize">{value}</span> total value</div>"#,
            r#"<div class="stat">Last updated <span id="lastUpdated">{last}</span></div>"#,
            r#"</div>"#,
        ),
        total = summary.total_assets,
        value = format_price(summary.total_value),
        last = escape(&last_updated),
    )
}

/// Confirmation step in front of every delete.
pub fn delete_prompt(asset: &Asset) -> String {
    format!(
        concat!(
            r#"<div class="confirm-delete">"#,
            r#"<p>Are you sure you want to delete this asset?</p>"#,
            r#"<p class="asset-name">{name}</p>"#,
            r#"<form method="post" action="/api/v1/ui/assets/{id}/delete?confirm=true">"#,
            r#"<button type="submit" class="btn btn-danger">Delete</button>"#,
            r#"</form>"#,
            r#"<a href="/api/v1/ui/assets" class="btn">Cancel</a>"#,
            r#"</div>"#,
        ),
        id = asset.id,
        name = escape(&asset.name),
    )
}

pub fn notification(message: &str, kind: NoticeKind) -> String {
    format!(
        r#"<div class="notification {}">{}</div>"#,
        kind.class(),
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::repo_types::Quality;
    use time::macros::datetime;

    fn asset(name: &str, description: &str) -> Asset {
        Asset {
            id: 17,
            name: name.into(),
            description: description.into(),
            file_type: "video".into(),
            year_purchased: 2012,
            purchase_price: 3.0,
            year_sold: None,
            sold_price: None,
            quality: Quality::Decent,
            user_id: 1,
            created_at: datetime!(2024-01-01 0:00 UTC),
            updated_at: datetime!(2024-01-01 0:00 UTC),
        }
    }

    #[test]
    fn empty_states_differ_for_list_and_search() {
        assert!(asset_grid(&[]).contains("No assets yet"));
        assert!(filtered_grid(&[]).contains("No assets found"));
    }

    #[test]
    fn card_shows_badge_price_and_placeholder() {
        let html = asset_grid(&[asset("Projector", "")]);
        assert!(html.contains(r#"<div class="asset-name">Projector</div>"#));
        assert!(html.contains("No description"));
        assert!(html.contains("#f59e0b"));
        assert!(html.contains(">Decent<"));
        assert!(html.contains("$3.00"));
        assert!(html.contains("/api/v1/ui/assets/17/delete"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let html = filtered_grid(&[asset("Tom & Jerry \"box\"", "it's")]);
        assert!(html.contains("Tom &amp; Jerry &quot;box&quot;"));
        assert!(html.contains("it&#39;s"));
        assert_eq!(escape("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn details_and_prompt_render() {
        let a = asset("Projector", "ceiling mount");
        let html = asset_details(&AssetDetails::from(&a));
        assert!(html.contains("<strong>Year Sold:</strong> Not sold yet"));
        assert!(html.contains("2024-01-01 00:00:00"));

        let prompt = delete_prompt(&a);
        assert!(prompt.contains("Are you sure you want to delete this asset?"));
        assert!(prompt.contains("confirm=true"));
    }

    #[test]
    fn dashboard_without_assets_shows_dash() {
        let html = dashboard(&DashboardSummary {
            total_assets: 0,
            total_value: 0.0,
            last_updated: None,
        });
        assert!(html.contains(r#"<span id="lastUpdated">-</span>"#));
        assert!(html.contains("$0.00"));
    }

    #[test]
    fn notification_carries_kind() {
        assert_eq!(
            notification("Asset deleted successfully!", NoticeKind::Success),
            r#"<div class="notification success">Asset deleted successfully!</div>"#
        );
    }
}
