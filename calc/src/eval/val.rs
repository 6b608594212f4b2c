use crate::{ArithError, OpT, Val};

type Result<T> = std::result::Result<T, ArithError>;

impl OpT {
    /// Applies the operator. A missing left-hand-side counts as `0` for `+` and `-`, every other
    /// operator requires one.
    pub fn apply(&self, lhs: Option<Val>, rhs: Val) -> Result<Val> {
        let lhs = match lhs {
            Some(v) => v,
            None if self.is_sign() => Val::Int(0),
            None => return Err(ArithError::MissingLhs),
        };

        match self {
            Self::Add => add(lhs, rhs),
            Self::Sub => sub(lhs, rhs),
            Self::Mul => mul(lhs, rhs),
            Self::Div => div(lhs, rhs),
            Self::IntDiv => int_div(lhs, rhs),
            Self::Rem => rem(lhs, rhs),
            Self::Pow => pow(lhs, rhs),
        }
    }
}

fn add(a: Val, b: Val) -> Result<Val> {
    match (a, b) {
        (Val::Int(a), Val::Int(b)) => a.checked_add(b).map(Val::Int).ok_or(ArithError::Overflow),
        _ => Ok(Val::Float(a.to_f64() + b.to_f64())),
    }
}

fn sub(a: Val, b: Val) -> Result<Val> {
    match (a, b) {
        (Val::Int(a), Val::Int(b)) => a.checked_sub(b).map(Val::Int).ok_or(ArithError::Overflow),
        _ => Ok(Val::Float(a.to_f64() - b.to_f64())),
    }
}

fn mul(a: Val, b: Val) -> Result<Val> {
    match (a, b) {
        (Val::Int(a), Val::Int(b)) => a.checked_mul(b).map(Val::Int).ok_or(ArithError::Overflow),
        _ => Ok(Val::Float(a.to_f64() * b.to_f64())),
    }
}

/// Real division, the result is always a float.
fn div(a: Val, b: Val) -> Result<Val> {
    if b.is_zero() {
        return Err(ArithError::DivideByZero);
    }
    Ok(Val::Float(a.to_f64() / b.to_f64()))
}

/// Division rounding towards negative infinity.
fn int_div(a: Val, b: Val) -> Result<Val> {
    if b.is_zero() {
        return Err(ArithError::IntDivideByZero);
    }

    match (a, b) {
        (Val::Int(a), Val::Int(b)) => {
            let q = a.checked_div(b).ok_or(ArithError::Overflow)?;
            if a % b != 0 && (a < 0) != (b < 0) {
                Ok(Val::Int(q - 1))
            } else {
                Ok(Val::Int(q))
            }
        }
        _ => Ok(Val::Float((a.to_f64() / b.to_f64()).floor())),
    }
}

/// Remainder of [`int_div`], it has the sign of the divisor.
fn rem(a: Val, b: Val) -> Result<Val> {
    if b.is_zero() {
        return Err(ArithError::IntDivideByZero);
    }

    match (a, b) {
        (Val::Int(a), Val::Int(b)) => {
            let r = a.wrapping_rem(b);
            if r != 0 && (r < 0) != (b < 0) {
                Ok(Val::Int(r + b))
            } else {
                Ok(Val::Int(r))
            }
        }
        _ => {
            let (a, b) = (a.to_f64(), b.to_f64());
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                Ok(Val::Float(r + b))
            } else {
                Ok(Val::Float(r))
            }
        }
    }
}

fn pow(a: Val, b: Val) -> Result<Val> {
    match (a, b) {
        (Val::Int(base), Val::Int(exp)) if exp >= 0 => match base {
            0 | 1 => Ok(Val::Int(if exp == 0 { 1 } else { base })),
            -1 => Ok(Val::Int(if exp % 2 == 0 { 1 } else { -1 })),
            _ => {
                let exp = u32::try_from(exp).map_err(|_| ArithError::Overflow)?;
                base.checked_pow(exp).map(Val::Int).ok_or(ArithError::Overflow)
            }
        },
        _ => {
            let (x, y) = (a.to_f64(), b.to_f64());
            if x == 0.0 && y < 0.0 {
                return Err(ArithError::ZeroToNegativePower);
            }
            if x < 0.0 && y.is_finite() && y.fract() != 0.0 {
                return Err(ArithError::FractionalPowerOfNegative);
            }

            let r = x.powf(y);
            if r.is_infinite() && x.is_finite() && y.is_finite() {
                return Err(ArithError::ResultTooLarge);
            }
            Ok(Val::Float(r))
        }
    }
}
