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

use super::*;

impl ParserContext {
    /// Returns the list of definitions if all tokens represent a valid
    /// Gobstones program.
    pub fn parse_program(&mut self) -> Result<Vec<Definition>> {
        if !self.has_next() {
            return Err(SyntaxError::empty_source(self.token.span.start).into());
        }

        let mut definitions = Vec::new();
        while self.has_next() {
            match &self.token.token {
                Token::Program => {
                    definitions.push(Definition::Program(self.parse_program_definition()?));
                }
                Token::Procedure => {
                    definitions.push(Definition::Procedure(self.parse_procedure_definition()?));
                }
                Token::Function => {
                    definitions.push(Definition::Function(self.parse_function_definition()?));
                }
                // Reserved definition forms; reject without guessing at
                // their grammar.
                Token::Interactive | Token::Type => {
                    return Err(SyntaxError::definition_not_yet_supported(
                        self.token.token.to_string(),
                        self.token.span.start,
                    )
                    .into());
                }
                _ => return self.unexpected("definition"),
            }
        }
        Ok(definitions)
    }

    /// Returns a [`ProgramDefinition`] if the next tokens represent the
    /// program entry point.
    fn parse_program_definition(&mut self) -> Result<ProgramDefinition> {
        let start = self.expect(&Token::Program)?;
        let body = self.parse_block()?;
        Ok(ProgramDefinition { span: Span::new(start.start, body.span.end), body })
    }

    /// Returns a [`ProcedureDefinition`] if the next tokens represent a
    /// procedure: an uppercase name, lowercase parameters and a block.
    fn parse_procedure_definition(&mut self) -> Result<ProcedureDefinition> {
        let start = self.expect(&Token::Procedure)?;
        let name = self.expect_upper_identifier()?;
        let (params, _) = self.parse_paren_comma_list(Self::expect_lower_identifier)?;
        let body = self.parse_block()?;
        Ok(ProcedureDefinition { span: Span::new(start.start, body.span.end), name, params, body })
    }

    /// Returns a [`FunctionDefinition`] if the next tokens represent a
    /// function; identical to a procedure except the name is lowercase.
    fn parse_function_definition(&mut self) -> Result<FunctionDefinition> {
        let start = self.expect(&Token::Function)?;
        let name = self.expect_lower_identifier()?;
        let (params, _) = self.parse_paren_comma_list(Self::expect_lower_identifier)?;
        let body = self.parse_block()?;
        Ok(FunctionDefinition { span: Span::new(start.start, body.span.end), name, params, body })
    }
}
