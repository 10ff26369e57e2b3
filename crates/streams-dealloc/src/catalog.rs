//! The solver's array inventory, categorized for deallocation codegen.
//!
//! Every allocatable array owned by `mod_streams` appears in exactly one of
//! three categories, which decide how its release statement is guarded. The
//! catalog is an explicit value handed to the emitter: callers use the
//! built-in solver inventory or load an overriding one from a TOML file.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeallocError, Result};

/// Categorized inventory of the allocatable arrays owned by `mod_streams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    /// Arrays the solver always allocates; released unconditionally.
    #[serde(default)]
    pub always: Vec<String>,
    /// Arrays allocated only in CUDA builds; released inside the
    /// `#ifdef USE_CUDA` region.
    #[serde(default)]
    pub cuda: Vec<String>,
    /// Arrays whose allocation depends on the run's input; released behind
    /// an `allocated()` guard.
    #[serde(default)]
    pub optional: Vec<String>,
}

impl ResourceCatalog {
    /// Parse a catalog from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DeallocError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Serialize the catalog to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Total number of cataloged arrays.
    pub fn len(&self) -> usize {
        self.always.len() + self.cuda.len() + self.optional.len()
    }

    /// Whether the catalog holds no arrays at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that no array name appears twice, within or across categories.
    ///
    /// A duplicate would make the generated routine release the same array
    /// twice, which the Fortran runtime rejects at run time. The emitter
    /// itself does not deduplicate; callers validate first.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        for (category, names) in [
            ("always", &self.always),
            ("cuda", &self.cuda),
            ("optional", &self.optional),
        ] {
            for name in names {
                if let Some(first) = seen.insert(name.as_str(), category) {
                    return Err(DeallocError::DuplicateEntry {
                        name: name.clone(),
                        first,
                        second: category,
                    });
                }
            }
        }
        Ok(())
    }

    /// The built-in inventory of the solver's global state, in allocation
    /// order.
    pub fn solver_default() -> Self {
        Self {
            always: to_owned(ALWAYS_ALLOCATED),
            cuda: to_owned(CUDA_ALLOCATED),
            optional: to_owned(OPTIONAL_ALLOCATED),
        }
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

const ALWAYS_ALLOCATED: &[&str] = &[
    "wv_gpu",
    "w_order",

    "wallpfield_gpu",
    "slicexy_gpu",
    "vf_df_old",
    "uf",
    "evmax_mat_yz",
    "evmax_mat_y",
    "bulk5g_gpu",
    "rtrms_ib_gpu",
    "rtrms_ib_1d_gpu",

    "wbuf1s_gpu",
    "wbuf2s_gpu",
    "wbuf3s_gpu",
    "wbuf4s_gpu",
    "wbuf5s_gpu",
    "wbuf6s_gpu",
    "wbuf1r_gpu",
    "wbuf2r_gpu",
    "wbuf3r_gpu",
    "wbuf4r_gpu",
    "wbuf5r_gpu",
    "wbuf6r_gpu",
    "divbuf1s_gpu",
    "divbuf2s_gpu",
    "divbuf3s_gpu",
    "divbuf4s_gpu",
    "divbuf5s_gpu",
    "divbuf6s_gpu",
    "divbuf1r_gpu",
    "divbuf2r_gpu",
    "divbuf3r_gpu",
    "divbuf4r_gpu",
    "divbuf5r_gpu",
    "divbuf6r_gpu",
    "ducbuf1s_gpu",
    "ducbuf2s_gpu",
    "ducbuf3s_gpu",
    "ducbuf4s_gpu",
    "ducbuf5s_gpu",
    "ducbuf6s_gpu",
    "ducbuf1r_gpu",
    "ducbuf2r_gpu",
    "ducbuf3r_gpu",
    "ducbuf4r_gpu",
    "ducbuf5r_gpu",
    "ducbuf6r_gpu",

    "w",
    "fl",
    "fln",
    "temperature",
    "ducros",
    "wmean",
    "dcsidx",
    "dcsidx2",
    "dcsidxs",
    "detady",
    "detady2",
    "detadys",
    "dzitdz",
    "dzitdz2",
    "dzitdzs",
    "dcsidxh",
    "detadyh",
    "dzitdzh",
    "x",
    "y",
    "yn",
    "yn_gpu",
    "z",
    "xg",
    "coeff_deriv1",
    "coeff_deriv1s",
    "coeff_clap",
    "coeff_midpi",
    "cx_midpi",
    "cy_midpi",
    "cz_midpi",
    "fhat",
    "ibcnr",
    "dcoe",
    "winf",
    "winf1",
    "rf",
    "rfy",
    "vf_df",
    "by_df",
    "bz_df",
    "amat_df",
    "wallpfield",
    "slicexy",
    "xh",
    "yh",
    "zh",
    "xgh",
    "ygh",
    "zgh",
    "yplus_inflow",
    "yplus_recyc",
    "eta_inflow",
    "eta_recyc",
    "map_j_inn",
    "map_j_out",
    "weta_inflow",

    "ibc",
    "dxg",
    "dyg",
    "dzg",
    "w_av",
    "w_avzg",
    "w_av_1d",
    "w_avxzg",
    "bx_df",
    "wbuf1s",
    "wbuf2s",
    "wbuf3s",
    "wbuf4s",
    "wbuf5s",
    "wbuf6s",
    "wbuf1r",
    "wbuf2r",
    "wbuf3r",
    "wbuf4r",
    "wbuf5r",
    "wbuf6r",
    "divbuf1s",
    "divbuf2s",
    "divbuf3s",
    "divbuf4s",
    "divbuf5s",
    "divbuf6s",
    "divbuf1r",
    "divbuf2r",
    "divbuf3r",
    "divbuf4r",
    "divbuf5r",
    "divbuf6r",
    "ducbuf1s",
    "ducbuf2s",
    "ducbuf3s",
    "ducbuf4s",
    "ducbuf5s",
    "ducbuf6s",
    "ducbuf1r",
    "ducbuf2r",
    "ducbuf3r",
    "ducbuf4r",
    "ducbuf5r",
    "ducbuf6r",
    "yg",
    "zg",

    "wrecyc_gpu",
    "wrecycav_gpu",

    "tauw_x",

    "fdm_y_stencil_gpu",
    "fdm_y_stencil",
    "fdm_individual_stencil",
    "fdm_grid_points",
];

const CUDA_ALLOCATED: &[&str] = &[
    "fl_trans_gpu",
    "temperature_trans_gpu",
    "fhat_trans_gpu",

    "wv_trans_gpu",

    "w_gpu",
    "fl_gpu",
    "fln_gpu",
    "temperature_gpu",
    "ducros_gpu",
    "wmean_gpu",
    "dcsidx_gpu",
    "dcsidx2_gpu",
    "dcsidxs_gpu",
    "detady_gpu",
    "detady2_gpu",
    "detadys_gpu",
    "dzitdz_gpu",
    "dzitdz2_gpu",
    "dzitdzs_gpu",
    "dcsidxh_gpu",
    "detadyh_gpu",
    "dzitdzh_gpu",
    "x_gpu",
    "y_gpu",
    "z_gpu",
    "xg_gpu",
    "coeff_deriv1_gpu",
    "coeff_deriv1s_gpu",
    "coeff_clap_gpu",
    "coeff_midpi_gpu",
    "cx_midpi_gpu",
    "cy_midpi_gpu",
    "cz_midpi_gpu",
    "fhat_gpu",
    "ibcnr_gpu",
    "dcoe_gpu",
    "winf_gpu",
    "rf_gpu",
    "rfy_gpu",
    "vf_df_gpu",
    "by_df_gpu",
    "bz_df_gpu",
    "amat_df_gpu",

    "yplus_inflow_gpu",
    "yplus_recyc_gpu",
    "eta_inflow_gpu",
    "eta_recyc_gpu",
    "map_j_inn_gpu",
    "map_j_out_gpu",
    "weta_inflow_gpu",

    "gplus_x",
    "gminus_x",
    "gplus_y",
    "gminus_y",
    "gplus_z",
    "gminus_z",
];

const OPTIONAL_ALLOCATED: &[&str] = &[
    "xstat",
    "ixstat",
    "igxstat",

    "blowing_bc_slot_velocity",
    "blowing_bc_slot_velocity_gpu",

    "ncoords",
    "nblocks",
    "pbc",
];
