use std::{fs, path::Path};

use proptest::{prelude::*, test_runner::Config};
use telemetry_server::models::ConfigPaths;
use tempfile::TempDir;

fn touch(path: &Path) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, "{}").unwrap();
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Precedence over every existence combination
	#[test]
	fn test_first_existing_candidate_wins(
		explicit_exists in any::<bool>(),
		user_exists in any::<bool>(),
		system_exists in any::<bool>(),
	) {
		let temp_dir = TempDir::new().unwrap();
		let explicit = temp_dir.path().join("cli").join("general.json");
		let home = temp_dir.path().join("home");
		let user = ConfigPaths::user_config_path(&home);
		let system = temp_dir.path().join("etc").join("general_config.json");

		if explicit_exists {
			touch(&explicit);
		}
		if user_exists {
			touch(&user);
		}
		if system_exists {
			touch(&system);
		}

		let paths = ConfigPaths {
			system: system.clone(),
			..ConfigPaths::with_home(Some(&explicit), Some(&home))
		};
		let expected = if explicit_exists {
			Some(explicit)
		} else if user_exists {
			Some(user)
		} else if system_exists {
			Some(system)
		} else {
			None
		};

		prop_assert_eq!(paths.resolve().ok(), expected);
	}
}
