use std::env;

// Shim backends we can select for non-x86 targets
#[derive(PartialEq, Eq, Debug)]
struct ShimBackend {
    name: &'static str,
    cfg_flag: &'static str,
    required_arch: Option<&'static str>,
    required_feature: Option<&'static str>,
}

impl ShimBackend {
    // Define priority order between backends (lowest number == highest priority)
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "portable" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all shim backends this crate can compile on non-x86 targets.
    // The portable backend has no requirements and always matches.
    fn backends() -> Vec<ShimBackend> {
        vec![
            ShimBackend {
                name: "neon",
                cfg_flag: "shim_neon",
                required_arch: Some("aarch64"),
                required_feature: Some("neon"),
            },
            ShimBackend {
                name: "portable",
                cfg_flag: "shim_portable",
                required_arch: None,
                required_feature: None,
            },
        ]
    }

    fn matches(&self, target_arch: &str, target_features: &str) -> bool {
        let arch_ok = self
            .required_arch
            .map(|arch| arch == target_arch)
            .unwrap_or(true);

        let feature_ok = self
            .required_feature
            .map(|feature| target_features.split(',').any(|f| f == feature))
            .unwrap_or(true);

        arch_ok && feature_ok
    }
}

// Resolves which shim backend (if any) the target needs.
//
// Everything here is driven by the CARGO_CFG_TARGET_* variables Cargo sets
// for the *target*, never by probing the build host: the resolution must
// hold under cross-compilation.
struct TargetResolver;

impl TargetResolver {
    fn target_arch() -> String {
        env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default()
    }

    fn target_features() -> String {
        env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default()
    }

    fn is_x86_family(target_arch: &str) -> bool {
        target_arch == "x86" || target_arch == "x86_64"
    }

    fn apply() {
        let target_arch = Self::target_arch();
        let target_features = Self::target_features();

        // x86-family targets resolve to the native intrinsics; no shim
        // backend is compiled at all. Non-x86 targets pick the highest
        // priority backend whose requirements the target meets.
        if !Self::is_x86_family(&target_arch) {
            let mut backends = ShimBackend::backends();
            backends.sort_by_key(|backend| backend.priority());

            if let Some(backend) = backends
                .iter()
                .find(|backend| backend.matches(&target_arch, &target_features))
            {
                println!("cargo:rustc-cfg={}", backend.cfg_flag);
            }

            if env::var("CARGO_FEATURE_PORTABLE").is_err() {
                // lib.rs raises a compile_error! for this; the warning just
                // points at the fix earlier in the build output.
                println!(
                    "cargo:warning=simd-compat: target `{target_arch}` is not x86-family; \
                     enable the `portable` feature to compile the translation shim"
                );
            }
        }

        // Disable flag warnings for build
        println!("cargo::rustc-check-cfg=cfg(shim_neon)");
        println!("cargo::rustc-check-cfg=cfg(shim_portable)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    TargetResolver::apply();
}
