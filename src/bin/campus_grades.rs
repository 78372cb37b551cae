use campus_core::{
    cli::{grades, output, prompt::Prompter},
    config::{Profile, ProfileManager},
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
    let prompter = Prompter::from_env();

    if let Err(err) = grades::run(&profile, &prompter) {
        output::error(err);
        std::process::exit(1);
    }
}
