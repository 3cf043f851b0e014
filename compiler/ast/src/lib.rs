// Copyright (C) 2019-2025 The Gobstones Team.
// This file is part of the Gobstones language front end.

// The Gobstones front end is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Gobstones front end is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Gobstones front end. If not, see <https://www.gnu.org/licenses/>.

//! The abstract syntax tree of Gobstones programs.
//!
//! Every node family is a sum type whose variants are small structs carrying
//! their children and a [`Span`](gobstones_span::Span). Comparing trees while
//! ignoring positions goes through [`SyntacticallyEq`].

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod definitions;
pub use definitions::*;

pub mod statements;
pub use statements::*;

pub mod patterns;
pub use patterns::*;

pub mod expressions;
pub use expressions::*;

pub mod equality;
pub use equality::SyntacticallyEq;
