//! The `sxbp` library generates experimental 2D spiral-like shapes from
//! input binary data.
//!
//! Every bit of the input commits one ±90° turn of an axis-aligned
//! polyline; the solver then assigns each segment a length such that the
//! resulting figure never crosses itself. Solved figures can be
//! serialised to a compact binary format or rendered to a monochrome
//! bitmap (PBM or SVG output).

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::empty_drop,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exhaustive_enums,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::missing_const_for_fn,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::non_send_fields_in_send_ty,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic,
    clippy::path_buf_push_overwrite,
    clippy::pattern_type_mismatch,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_pub_crate,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trailing_empty_array,
    clippy::trait_duplication_in_bounds,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::type_repetition_in_bounds,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unseparated_literal_suffix,
    clippy::unused_peekable,
    clippy::unused_rounding,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads
)]
#![allow(
    // "It requires the user to type the module name twice."
    // => not true here since internal modules are hidden from the users.
    clippy::module_name_repetitions,
)]

// }}}

mod cache;
mod cell;
mod collide;
mod direction;
pub mod error;
pub mod experiment;
mod figure;
mod render;
mod serialise;
mod solve;

pub use cell::{Cell, Vector};
pub use direction::{Direction, Rotation};
pub use figure::{Figure, Line};
pub use render::Bitmap;
pub use serialise::Version;
pub use solve::{SolveMethod, SolveOptions};

use konst::{primitive::parse_u8, unwrap_ctx};

// -----------------------------------------------------------------------------

/// Version of the serialised figure format written by this crate.
///
/// Tracks the crate version: a load is accepted when the major versions
/// match.
pub const VERSION: Version = Version {
    major: unwrap_ctx!(parse_u8(env!("CARGO_PKG_VERSION_MAJOR"))),
    minor: unwrap_ctx!(parse_u8(env!("CARGO_PKG_VERSION_MINOR"))),
    patch: unwrap_ctx!(parse_u8(env!("CARGO_PKG_VERSION_PATCH"))),
};

/// Cell every figure starts from.
const ORIGIN: Cell = Cell::new(0, 0);

/// Number of turn bits contributed by each input byte.
const BITS_PER_BYTE: usize = 8;
