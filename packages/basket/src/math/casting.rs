use soroban_sdk::{ log, Env, String };

use crate::error::{ ErrorCode, BasketResult };

pub trait Cast: Sized {
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> BasketResult<T> {
        match self.try_into() {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at {}:{}", String::from_str(env, file!()), line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}

#[cfg(test)]
mod test {
    use super::Cast;
    use crate::error::ErrorCode;
    use soroban_sdk::Env;

    #[test]
    fn cast_within_range() {
        let env = Env::default();
        assert_eq!((42_i128).cast::<u128>(&env), Ok(42u128));
        assert_eq!((7_u32).cast::<i128>(&env), Ok(7i128));
    }

    #[test]
    fn cast_out_of_range() {
        let env = Env::default();
        assert_eq!((-1_i128).cast::<u128>(&env), Err(ErrorCode::CastingFailure));
        assert_eq!(u128::MAX.cast::<i128>(&env), Err(ErrorCode::CastingFailure));
    }
}
