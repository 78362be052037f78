// Build metadata is injected by CI through these variables and read with `option_env!`.
fn main() {
    println!("cargo:rerun-if-env-changed=HELLO_WEB_VERSION");
    println!("cargo:rerun-if-env-changed=HELLO_WEB_GIT_SHA");
    println!("cargo:rerun-if-env-changed=HELLO_WEB_BUILD_TIME");
}
