use std::ops::Range;

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE: &str = "https://api.notion.com";

/// Notion API version sent with every request via the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Environment variable consulted for the integration bearer token when no
/// token is configured explicitly.
pub const NOTION_TOKEN_ENV: &str = "NOTION_INTEGRATIONV2_TOKEN";

/// Page identifier used when none is supplied.
pub const DEFAULT_PAGE_ID: &str = "58d5f26367fb4197852a6546c10d9da0";

/// Calendar year the synthetic dataset covers by default.
pub const DEFAULT_YEAR: i32 = 2023;

/// Half-open range the daily sales amount is drawn from.
pub const SALES_RANGE: Range<u32> = 100..1000;
