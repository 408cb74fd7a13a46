//! Collection passes over plugins declared in this module tree.

mod broken;
mod collect;
mod mistyped;
mod plugins;
