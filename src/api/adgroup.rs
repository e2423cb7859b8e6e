use crate::catalog::adgroup;
use crate::Client;

/// Ad group operations. Obtained from [`Client::adgroup`].
#[derive(Debug, Clone, Copy)]
pub struct AdgroupApi<'a> {
    client: &'a Client,
}

impl<'a> AdgroupApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Create an ad group inside an existing campaign.
        create, create_with => adgroup::Create;
        get, get_with => adgroup::Get;
        /// Rename an ad group or change its bid and budget.
        update, update_with => adgroup::Update;
    }
}
