use crate::catalog::campaign;
use crate::Client;

/// Campaign operations. Obtained from [`Client::campaign`].
#[derive(Debug, Clone, Copy)]
pub struct CampaignApi<'a> {
    client: &'a Client,
}

impl<'a> CampaignApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Create a campaign. New campaigns start enabled unless `status` says otherwise.
        create, create_with => campaign::Create;
        /// Fetch campaigns by id or filter, one page at a time.
        get, get_with => campaign::Get;
        update, update_with => campaign::Update;
        /// Enable, disable or delete several campaigns at once.
        status_update, status_update_with => campaign::StatusUpdate;
    }
}
