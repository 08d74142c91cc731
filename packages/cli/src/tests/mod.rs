mod api_tests;
mod health_tests;
mod support;
