//! Asset catalog - the fixed, ordered list of downloadable assets
//!
//! Every query builds a fresh list, so callers may freely mutate what they
//! get back. Order is display order; the separator splits the per-product
//! downloads from the full archive.

use crate::asset::{AssetDownload, SEPARATOR_ID};
use hashbrown::HashSet;

/// Catalog of downloadable task assets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetCatalog;

impl AssetCatalog {
    /// All entries, separators included, in canonical order
    pub fn list_all() -> Vec<AssetDownload> {
        vec![
            AssetDownload::new("Orthophoto (GeoTIFF)", "orthophoto.tif", "fa fa-map-o"),
            AssetDownload::new("Orthophoto (PNG)", "orthophoto.png", "fa fa-picture-o"),
            AssetDownload::new("Orthophoto (MBTiles)", "orthophoto.mbtiles", "fa fa-picture-o"),
            AssetDownload::new("Terrain Model (GeoTIFF)", "dtm.tif", "fa fa-area-chart"),
            AssetDownload::new("Surface Model (GeoTIFF)", "dsm.tif", "fa fa-area-chart"),
            AssetDownload::new("Point Cloud (LAS)", "georeferenced_model.las", "fa fa-cube"),
            AssetDownload::new("Point Cloud (LAZ)", "georeferenced_model.laz", "fa fa-cube"),
            AssetDownload::new("Point Cloud (PLY)", "georeferenced_model.ply", "fa fa-cube"),
            AssetDownload::new("Point Cloud (CSV)", "georeferenced_model.csv", "fa fa-cube"),
            AssetDownload::new("Textured Model", "textured_model.zip", "fa fa-connectdevelop"),
            AssetDownload::separator(),
            AssetDownload::new("All Assets", "all.zip", "fa fa-file-archive-o"),
        ]
    }

    /// All real assets, in canonical order
    pub fn list_downloadable() -> Vec<AssetDownload> {
        Self::list_all()
            .into_iter()
            .filter(|asset| !asset.is_separator())
            .collect()
    }

    /// Entries whose asset id is in `ids`, in catalog order
    ///
    /// Unknown and duplicate ids are ignored. Only real assets match, so the
    /// separator's placeholder id selects nothing.
    pub fn list_by_ids<I, S>(ids: I) -> Vec<AssetDownload>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: HashSet<String> = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        if wanted.contains(SEPARATOR_ID) {
            log::warn!("Ignoring separator placeholder id '{}'", SEPARATOR_ID);
        }

        Self::list_all()
            .into_iter()
            .filter(|asset| asset.descriptor().is_some() && wanted.contains(asset.asset_id()))
            .collect()
    }

    /// Look up a real asset by id
    pub fn find(asset_id: &str) -> Option<AssetDownload> {
        Self::list_downloadable()
            .into_iter()
            .find(|asset| asset.asset_id() == asset_id)
    }

    /// Check if an id names a real asset
    pub fn contains(asset_id: &str) -> bool {
        Self::find(asset_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_order() {
        let ids: Vec<String> = AssetCatalog::list_all()
            .iter()
            .map(|a| a.asset_id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "orthophoto.tif",
                "orthophoto.png",
                "orthophoto.mbtiles",
                "dtm.tif",
                "dsm.tif",
                "georeferenced_model.las",
                "georeferenced_model.laz",
                "georeferenced_model.ply",
                "georeferenced_model.csv",
                "textured_model.zip",
                "-",
                "all.zip",
            ]
        );
        assert!(AssetCatalog::list_all()[10].is_separator());
    }

    #[test]
    fn test_list_downloadable() {
        let all = AssetCatalog::list_all();
        let downloadable = AssetCatalog::list_downloadable();
        assert_eq!(downloadable.len(), all.len() - 1);
        assert!(downloadable.iter().all(|a| !a.is_separator()));

        let expected: Vec<AssetDownload> =
            all.into_iter().filter(|a| !a.is_separator()).collect();
        assert_eq!(downloadable, expected);
    }

    #[test]
    fn test_unique_ids() {
        let downloadable = AssetCatalog::list_downloadable();
        let ids: HashSet<&str> = downloadable.iter().map(|a| a.asset_id()).collect();
        assert_eq!(ids.len(), downloadable.len());
    }

    #[test]
    fn test_list_by_ids_catalog_order() {
        let forward = AssetCatalog::list_by_ids(["dtm.tif", "georeferenced_model.las"]);
        let reversed = AssetCatalog::list_by_ids(["georeferenced_model.las", "dtm.tif"]);
        assert_eq!(forward.len(), 2);
        assert_eq!(forward[0].label(), "Terrain Model (GeoTIFF)");
        assert_eq!(forward[1].label(), "Point Cloud (LAS)");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_list_by_ids_tolerates_noise() {
        assert!(AssetCatalog::list_by_ids(["not-a-real-id"]).is_empty());
        assert!(AssetCatalog::list_by_ids(Vec::<String>::new()).is_empty());

        let dupes = AssetCatalog::list_by_ids(vec![
            "all.zip".to_string(),
            "all.zip".to_string(),
            "bogus".to_string(),
        ]);
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].asset_id(), "all.zip");
    }

    #[test]
    fn test_list_by_ids_never_returns_separator() {
        let downloadable_ids: Vec<String> = AssetCatalog::list_downloadable()
            .iter()
            .map(|a| a.asset_id().to_string())
            .collect();
        let result = AssetCatalog::list_by_ids(&downloadable_ids);
        assert!(result.iter().all(|a| !a.is_separator()));

        assert!(AssetCatalog::list_by_ids(["-"]).is_empty());

        let mixed = AssetCatalog::list_by_ids(["-", "all.zip", "textured_model.zip"]);
        let ids: Vec<&str> = mixed.iter().map(|a| a.asset_id()).collect();
        assert_eq!(ids, vec!["textured_model.zip", "all.zip"]);
    }

    #[test]
    fn test_find() {
        let found = AssetCatalog::find("dsm.tif").unwrap();
        assert_eq!(found.label(), "Surface Model (GeoTIFF)");
        assert!(AssetCatalog::find("-").is_none());
        assert!(AssetCatalog::find("nope").is_none());
        assert!(AssetCatalog::contains("all.zip"));
        assert!(!AssetCatalog::contains("-"));
    }

    #[test]
    fn test_returned_list_is_a_copy() {
        let mut first = AssetCatalog::list_all();
        first.pop();
        first.push(AssetDownload::new("Bogus", "bogus", ""));
        first.remove(0);

        let second = AssetCatalog::list_all();
        assert_eq!(second.len(), 12);
        assert_eq!(second[0].asset_id(), "orthophoto.tif");
        assert_eq!(second[11].asset_id(), "all.zip");
        assert_eq!(second, AssetCatalog::list_all());
    }
}
