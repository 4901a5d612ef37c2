//! Integration tests for cfsync-api
//!
//! Uses wiremock to simulate the Cloudflare Images API and verifies
//! end-to-end behavior of the listing pagination and the multipart upload.

mod common;

mod test_list;
mod test_upload;
