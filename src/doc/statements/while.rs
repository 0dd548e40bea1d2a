/*!
# `WHILE <comparison> REPEAT` ... `ENDWHILE`

## Purpose
Loop until the comparison no longer holds.

## Remarks
The comparison is tested before every pass, so the body may run zero times.
`REPEAT` must end its line.

## Example
```text
LET i = 1
WHILE i <= 3 REPEAT
    PRINT i
    LET i = i + 1
ENDWHILE
```

*/
