mod listing_service_test;
