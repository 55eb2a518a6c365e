// End-to-end tests for the speak pipeline
//
// Both the token endpoint and the synthesis endpoint are served by a wiremock
// MockServer started per test, so tests run in parallel without sharing state.
//
// - test_cli: the compiled binary, driven through its command line
// - test_auth: token issuance and its failure modes
// - test_speak: the full token -> synthesis -> sink pipeline

mod helpers;
mod test_auth;
mod test_cli;
