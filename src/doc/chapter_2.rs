/*!
# Expressions

Expressions combine numbers and variables with `+`, `-`, `*` and `/`.
Multiplication and division bind tighter than addition and subtraction,
and operators of equal precedence group left to right. A single leading
`+` or `-` may precede any number or variable. There are no parentheses.

```text
LET a = 1 + 2 * 3      # 7
LET b = 10 - 4 - 3     # 3
LET c = -a * 2         # -14
```

All arithmetic is floating point, so `1 / 2` is `0.5`.

## Comparisons

`IF` and `WHILE` take a comparison: an expression, a comparison operator
and another expression. The operators are `==`, `!=`, `<`, `<=`, `>` and
`>=`. Further operators may follow, in which case they are chained the way
C chains them, left to right on the truth value.

```text
IF a >= 7 THEN
    PRINT "big"
ENDIF
```

*/
