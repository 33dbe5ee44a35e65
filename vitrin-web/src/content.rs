//! Storefront content shared by every page.

use std::sync::OnceLock;
use vitrin_core::Catalog;

static CATALOG: OnceLock<Result<Catalog, String>> = OnceLock::new();

/// The embedded catalog, parsed and validated once.
///
/// # Errors
/// Returns the load error message when the embedded catalog is invalid.
pub fn catalog() -> Result<&'static Catalog, &'static str> {
    CATALOG
        .get_or_init(|| {
            Catalog::builtin().map_err(|err| {
                log::error!("storefront catalog failed to load: {err}");
                err.to_string()
            })
        })
        .as_ref()
        .map_err(String::as_str)
}
