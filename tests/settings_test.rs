use deck_analyst::presentation::config::LlmProvider;
use deck_analyst::presentation::{Environment, Settings};

// The only test here that touches process environment variables.
#[test]
fn given_defaults_and_env_overrides_when_loading_then_env_wins() {
    let defaults = Settings::load(Environment::Test).unwrap();

    assert_eq!(defaults.server.port, 8000);
    assert_eq!(defaults.upload.max_file_size_bytes, 10 * 1024 * 1024);
    assert_eq!(defaults.cache.max_entries, 100);
    assert_eq!(defaults.cache.ttl().as_secs(), 3600);
    assert_eq!(defaults.llm.provider, LlmProvider::Gemini);
    assert_eq!(defaults.llm.model, "gemini-1.5-flash");
    assert!(!defaults.scaffold.enabled);

    unsafe {
        std::env::set_var("APP__SERVER__PORT", "9100");
        std::env::set_var("APP__LLM__PROVIDER", "openai");
        std::env::set_var("APP__CACHE__TTL_SECONDS", "60");
    }

    let overridden = Settings::load(Environment::Test).unwrap();

    unsafe {
        std::env::remove_var("APP__SERVER__PORT");
        std::env::remove_var("APP__LLM__PROVIDER");
        std::env::remove_var("APP__CACHE__TTL_SECONDS");
    }

    assert_eq!(overridden.server.port, 9100);
    assert_eq!(overridden.llm.provider, LlmProvider::OpenAi);
    assert_eq!(overridden.cache.ttl_seconds, 60);
}

#[test]
fn given_environment_names_when_parsing_then_aliases_are_accepted() {
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(Environment::try_from(" Dev ".to_string()), Ok(Environment::Local));
    assert!(Environment::try_from("staging".to_string()).is_err());
}
