use crate::catalog::ad;
use crate::Client;

/// Ad operations. Obtained from [`Client::ad`].
#[derive(Debug, Clone, Copy)]
pub struct AdApi<'a> {
    client: &'a Client,
}

impl<'a> AdApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Create an ad from one or more creatives.
        create, create_with => ad::Create;
        get, get_with => ad::Get;
        update, update_with => ad::Update;
    }
}
