use shadow_rs::ShadowBuilder;

fn main() {
    // Package and git metadata for `admin-api --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}