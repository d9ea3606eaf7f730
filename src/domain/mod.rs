//
// Copyright (c) 2024 Nathan Fiedler
//
pub mod entities;
pub mod repositories;
pub mod usecases;
