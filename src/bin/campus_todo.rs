use campus_core::{
    cli::{output, prompt::Prompter, todo},
    config::{Profile, ProfileManager},
    tasks::TaskStore,
};

fn main() {
    campus_core::init();

    let profile = match ProfileManager::new().load() {
        Ok(profile) => profile,
        Err(err) => {
            output::warning(format!("Falling back to the default profile: {}", err));
            Profile::default()
        }
    };
    let store = TaskStore::at_default();
    let prompter = Prompter::from_env();

    if let Err(err) = todo::run(&store, &profile, &prompter) {
        output::error(err);
        std::process::exit(1);
    }
}
