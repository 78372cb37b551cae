use campus_core::{
    cli::{bank, output, prompt::Prompter},
    config::{Profile, ProfileManager},
    ledger::LedgerStore,
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
    let store = LedgerStore::at_default();
    let prompter = Prompter::from_env();

    if let Err(err) = bank::run(&store, &profile, &prompter) {
        output::error(err);
        std::process::exit(1);
    }
}
