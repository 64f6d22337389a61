/// `User-Agent` header sent with every request, e.g. `noasacrypto-rs/1.0.0`.
pub fn get_user_agent() -> String {
    format!("noasacrypto-rs/{}", env!("CARGO_PKG_VERSION"))
}
