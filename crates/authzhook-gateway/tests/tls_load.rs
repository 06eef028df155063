#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use authzhook_core::error::ClientCode;
use authzhook_gateway::config::TlsSection;
use authzhook_gateway::transport::tls;

#[tokio::test]
async fn missing_pem_pair_is_internal_error() {
    let section = TlsSection {
        cert_path: "missing.crt".into(),
        key_path: "missing.key".into(),
    };
    let err = tls::load(&section).await.expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::Internal);
    assert!(err.to_string().contains("missing.crt"));
}
