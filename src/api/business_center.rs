use crate::catalog::business_center;
use crate::Client;

/// Business center operations. Obtained from [`Client::business_center`].
#[derive(Debug, Clone, Copy)]
pub struct BusinessCenterApi<'a> {
    client: &'a Client,
}

impl<'a> BusinessCenterApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Create a business center and its first advertiser account.
        create, create_with => business_center::Create;
        get, get_with => business_center::Get;
    }
}
