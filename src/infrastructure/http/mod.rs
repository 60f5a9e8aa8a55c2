mod http_listing_feed;

pub use http_listing_feed::HttpListingFeed;
