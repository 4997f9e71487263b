//! Core business logic for relay-confgen.
//!
//! # Modules
//!
//! - [`transform`] - Configuration to environment variable transformation
//! - [`docs`] - Environment variable documentation rendering
//! - [`output`] - YAML rendering and idempotent file writing
//! - [`generate`] - Generation runs over the whole component catalog
//!
//! # Generation Workflow
//!
//! 1. **Examples**: Render one sanitised config per component type
//! 2. **Envify**: Build the environment config and its variable registry
//! 3. **Verify**: Check every placeholder against the registry
//! 4. **Document**: Render the registry as Markdown
//! 5. **Write**: Persist artifacts whose content changed
//!
//! # Example
//!
//! ```rust,no_run
//! use relay_confgen::core::generate::Generator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = Generator::new("./config").run()?;
//!
//! println!("Generated: {}", summary.generated.len());
//! println!("Skipped: {}", summary.skipped.len());
//! # Ok(())
//! # }
//! ```

pub mod docs;
pub mod generate;
pub mod output;
pub mod transform;
