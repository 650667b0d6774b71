//! Coordinate value manager: conversion tables and the stateless
//! conversion/validation engine shared by all motion validation.

pub mod tables;
pub mod value;

pub use value::ValueManager;
