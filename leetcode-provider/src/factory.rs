//! Service factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{ChinaService, GlobalService};
use crate::traits::LeetCodeService;
use crate::types::{Credential, SiteVariant};

/// Creates the [`LeetCodeService`] for `variant`, talking to the live site.
///
/// The returned service is wrapped in `Arc<dyn LeetCodeService>` so it can be
/// shared by every capability group and request task.
///
/// # Examples
///
/// ```rust,no_run
/// use leetcode_provider::{create_service, Credential, LeetCodeService, SiteVariant};
///
/// let service = create_service(SiteVariant::China, Credential::anonymous()).unwrap();
/// assert!(service.is_china());
/// assert!(!service.is_authenticated());
/// ```
pub fn create_service(
    variant: SiteVariant,
    credential: Credential,
) -> Result<Arc<dyn LeetCodeService>> {
    match variant {
        SiteVariant::Global => Ok(Arc::new(GlobalService::new(credential)?)),
        SiteVariant::China => Ok(Arc::new(ChinaService::new(credential)?)),
    }
}
