pub mod testing {
    use std::{
        env,
        sync::{LazyLock, Mutex, PoisonError},
    };

    static SERIAL_TEST: LazyLock<Mutex<()>> = LazyLock::new(Default::default);

    /// Puts back the environment variables it recorded when dropped, also during a panic.
    struct RestoreEnv(Vec<(String, Option<String>)>);

    impl Drop for RestoreEnv {
        fn drop(&mut self) {
            for (key, value) in self.0.drain(..) {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }

    /// Sets (`Some`) or removes (`None`) environment variables for the duration of `closure`.
    ///
    /// Calls are serialized, since the process environment is shared by all tests.
    pub fn with_env_vars<F>(kvs: Vec<(&str, Option<&str>)>, closure: F)
    where
        F: FnOnce(),
    {
        let _guard = SERIAL_TEST.lock().unwrap_or_else(PoisonError::into_inner);

        let mut restore = RestoreEnv(Vec::with_capacity(kvs.len()));
        for (key, value) in kvs {
            restore.0.push((key.to_owned(), env::var(key).ok()));

            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }

        closure();
    }
}
