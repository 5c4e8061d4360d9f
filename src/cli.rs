//! Command-line interface definition for catalog-admin
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, products, and categories.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{SortOrder, StockStatus, ALL_CATEGORIES};

/// catalog-admin - manage an e-commerce product catalog
#[derive(Parser, Debug, Clone)]
#[command(name = "catalog-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the key-value store location
    #[arg(long, env = "CATALOG_ADMIN_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in and persist the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long, env = "CATALOG_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Browse and edit products
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Browse categories and their badge colors
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },
}

/// Product subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProductCommand {
    /// List one page of products
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Products per page (defaults to pagination.per_page)
        #[arg(long)]
        per_page: Option<u32>,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Category slug
        #[arg(short = 'C', long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Field to sort by
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Stock filter applied to the fetched page
        /// (all-stock, in-stock, low-stock, out-of-stock)
        #[arg(long, default_value = "all-stock")]
        stock: StockStatus,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single product
    Show {
        /// Product id
        id: u64,
    },

    /// Create a product from a JSON file
    Add {
        /// JSON file with product fields
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Update a product from a JSON file of changed fields
    Update {
        /// Product id
        id: u64,

        /// JSON file with the fields to change
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: u64,
    },
}

/// Category subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CategoryCommand {
    /// List categories with their badge colors
    List,

    /// Show locally assigned badge colors
    Colors,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            store_path: None,
            command: Commands::Whoami,
        }
    }
}
