use crate::catalog::advertiser;
use crate::Client;

/// Advertiser account operations. Obtained from [`Client::advertiser`].
#[derive(Debug, Clone, Copy)]
pub struct AdvertiserApi<'a> {
    client: &'a Client,
}

impl<'a> AdvertiserApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Get information about one or more advertisers.
        info, info_with => advertiser::Info;
        /// Update an advertiser's name, description, budgets or qualification images.
        update, update_with => advertiser::Update;
    }
}
