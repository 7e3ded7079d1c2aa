use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Exponent,
}

impl BindingPower {
    /// One level looser, used as the minimum for right-associative operands.
    pub fn weaker(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Relational => BindingPower::Default,
            BindingPower::Additive => BindingPower::Relational,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponent => BindingPower::Multiplicative,
        }
    }
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Operator {
    pub binding_power: BindingPower,
    pub associativity: Associativity,
}

impl Operator {
    /// Minimum binding power for the right-hand operand.
    pub fn right_binding_power(&self) -> BindingPower {
        match self.associativity {
            Associativity::Left => self.binding_power,
            Associativity::Right => self.binding_power.weaker(),
        }
    }
}

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> = {
        let mut map = HashMap::new();

        // Relational
        for symbol in ["<", "<=", ">", ">=", "==", "!="] {
            map.insert(symbol, Operator { binding_power: BindingPower::Relational, associativity: Associativity::Left });
        }

        // Additive and multiplicative
        for symbol in ["+", "-"] {
            map.insert(symbol, Operator { binding_power: BindingPower::Additive, associativity: Associativity::Left });
        }
        for symbol in ["*", "/", "%"] {
            map.insert(symbol, Operator { binding_power: BindingPower::Multiplicative, associativity: Associativity::Left });
        }

        map.insert("^", Operator { binding_power: BindingPower::Exponent, associativity: Associativity::Right });
        map
    };
}

pub fn lookup_operator(symbol: &str) -> Option<Operator> {
    OPERATOR_LOOKUP.get(symbol).copied()
}
