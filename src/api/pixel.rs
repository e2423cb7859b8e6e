use crate::catalog::pixel;
use crate::Client;

/// Pixel operations. Obtained from [`Client::pixel`].
#[derive(Debug, Clone, Copy)]
pub struct PixelApi<'a> {
    client: &'a Client,
}

impl<'a> PixelApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        create, create_with => pixel::Create;
        list, list_with => pixel::List;
        update, update_with => pixel::Update;
    }
}
