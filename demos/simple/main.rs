use optimizely::ClientConfig;

pub fn main() -> optimizely::Result<()> {
    // RUST_LOG=optimizely=debug shows every request being sent.
    env_logger::init();

    // Reads OPTIMIZELY_API_KEY, and optionally OPTIMIZELY_API_BASE / OPTIMIZELY_TOKEN_TYPE.
    let client = ClientConfig::from_env()?.to_client()?;

    for project in client.projects().list()? {
        println!(
            "project {:?}: {}",
            project.id,
            project.project_name.as_deref().unwrap_or("<unnamed>")
        );

        // Experiments can only be listed per project.
        for experiment in project.experiments(&client)? {
            println!(
                "  experiment {:?} [{}]",
                experiment.id,
                experiment.status.as_deref().unwrap_or("unknown")
            );
        }
    }

    Ok(())
}
