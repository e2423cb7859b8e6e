//! Operation groups, one per resource category.
//!
//! Each group borrows the [`Client`](crate::Client) and exposes every
//! operation of its category in two forms: `op(&input)` with default options
//! and `op_with(&input, options)` with per-call [`RequestOptions`](crate::RequestOptions).

/// Generates the plain and `_with` methods of an operation group.
macro_rules! group_methods {
    ($($(#[$meta:meta])* $name:ident, $name_with:ident => $op:ty;)+) => {
        $(
            $(#[$meta])*
            pub async fn $name(
                &self,
                input: &<$op as $crate::catalog::Operation>::Input,
            ) -> $crate::Result<$crate::Response<<$op as $crate::catalog::Operation>::Output>> {
                self.client
                    .execute::<$op>(input, $crate::RequestOptions::default())
                    .await
            }

            #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with per-call options.")]
            pub async fn $name_with(
                &self,
                input: &<$op as $crate::catalog::Operation>::Input,
                options: $crate::RequestOptions,
            ) -> $crate::Result<$crate::Response<<$op as $crate::catalog::Operation>::Output>> {
                self.client.execute::<$op>(input, options).await
            }
        )+
    };
}

mod ad;
mod adgroup;
mod advertiser;
mod app;
mod business_center;
mod campaign;
mod pixel;
mod report;

pub use ad::AdApi;
pub use adgroup::AdgroupApi;
pub use advertiser::AdvertiserApi;
pub use app::AppApi;
pub use business_center::BusinessCenterApi;
pub use campaign::CampaignApi;
pub use pixel::PixelApi;
pub use report::ReportApi;
